use iced_core::Size;

use crate::config::SceneConfig;
use crate::node::Node;
use crate::painter::{DisplayList, Painter, Recorder, TextMeasure};
use crate::query::{QueryEvent, QueryInput, QueryOutcome};
use crate::render;
use crate::style;
use crate::viewport::{PointerEvent, Viewport};

/// The loaded tree together with all view state mutated by input.
#[derive(Debug, Clone)]
pub struct Scene {
    root: Node,
    viewport: Viewport,
    query: QueryInput,
    config: SceneConfig,
}

impl Scene {
    pub fn new(root: Node, config: SceneConfig) -> Self {
        Self {
            root,
            viewport: Viewport::new(config.zoom_speed),
            query: QueryInput::default(),
            config,
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn query(&self) -> &QueryInput {
        &self.query
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Apply pan/zoom input.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.viewport.handle(event);
    }

    /// Apply query editing input; a commit re-runs the search.
    pub fn handle_query(&mut self, event: QueryEvent) -> QueryOutcome {
        self.query.handle(event, &mut self.root)
    }

    /// Paint one full frame: background, tree and overlay.
    pub fn paint(&mut self, screen: Size, painter: &mut impl Painter) {
        painter.clear(style::BLACK);
        render::render_tree(
            &mut self.root,
            self.viewport.transform(),
            &self.config,
            painter,
        );
        render::render_overlay(&self.query, screen, painter);
    }

    /// Record one full frame at `time` seconds, sizing labels with
    /// `measure`.
    pub fn frame<M: TextMeasure + ?Sized>(
        &mut self,
        screen: Size,
        time: f32,
        measure: &M,
    ) -> DisplayList {
        let mut recorder = Recorder::new(time, measure);
        self.paint(screen, &mut recorder);
        recorder.finish()
    }
}
