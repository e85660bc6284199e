//! Layout, animation and search highlighting for an interactive syntax tree
//! viewer.
//!
//! The crate is UI-agnostic: a frame is painted through the [`Painter`]
//! trait, and [`Recorder`] collects the calls into a [`DisplayList`] so a
//! retained-mode toolkit can replay them. Text widths come from the toolkit
//! through [`TextMeasure`].
//!
//! The per-frame flow is:
//! 1. feed pointer input to [`Scene::handle_pointer`] and key input to
//!    [`Scene::handle_query`];
//! 2. call [`Scene::frame`] (or [`Scene::paint`]) once per displayed frame,
//!    which lays out the tree, advances entrance animations and emits draw
//!    calls;
//! 3. replay the resulting [`DrawCommand`]s.
//!
//! # Quick Example
//!
//! ```
//! use astviz_scene::{
//!     QueryEvent, Scene, SceneConfig, TextMeasure, parse_document,
//! };
//! use iced_core::Size;
//!
//! struct Monospace;
//!
//! impl TextMeasure for Monospace {
//!     fn text_width(&self, text: &str, size: f32) -> f32 {
//!         text.chars().count() as f32 * size * 0.6
//!     }
//! }
//!
//! let root = parse_document(br#"{"kind":"A","inner":[{"kind":"B"}]}"#)?;
//! let mut scene = Scene::new(root, SceneConfig::default());
//!
//! scene.handle_query(QueryEvent::Toggle);
//! scene.handle_query(QueryEvent::Insert('B'));
//! scene.handle_query(QueryEvent::Toggle);
//!
//! let frame = scene.frame(Size::new(1200.0, 900.0), 0.0, &Monospace);
//! assert_eq!(frame.node_count(), 2);
//! assert_eq!(scene.root().highlighted_labels(), vec!["A", "B"]);
//! # Ok::<(), astviz_scene::SceneError>(())
//! ```

pub mod animation;
pub mod highlight;
pub mod layout;
pub mod style;

mod config;
mod document;
mod error;
mod node;
mod painter;
mod query;
mod render;
mod scene;
mod viewport;

pub use config::SceneConfig;
pub use document::{
    NodeSource, UNKNOWN_LABEL, load_document, parse_document,
};
pub use error::SceneError;
pub use node::Node;
pub use painter::{DisplayList, DrawCommand, Painter, Recorder, TextMeasure};
pub use query::{QueryEvent, QueryInput, QueryMode, QueryOutcome, accepts};
pub use render::{render_overlay, render_tree};
pub use scene::Scene;
pub use viewport::{
    DEFAULT_ZOOM_SPEED, MAX_ZOOM, MIN_ZOOM, PointerEvent, ViewTransform,
    Viewport,
};
