use std::path::PathBuf;

use astviz_scene::SceneConfig;
use iced::Size;

use crate::errors::ConfigError;

pub(crate) const WINDOW_TITLE: &str = "ASTViz";
pub(crate) const WINDOW_WIDTH: f32 = 1200.0;
pub(crate) const WINDOW_HEIGHT: f32 = 900.0;

const DEFAULT_PROGRAM: &str = "astviz";

/// Startup configuration resolved from the command line.
#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) document: PathBuf,
    pub(crate) window_size: Size,
    pub(crate) scene: SceneConfig,
}

impl AppConfig {
    /// Build the config from process arguments, program name first.
    pub(crate) fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let program = args.next().unwrap_or_else(|| DEFAULT_PROGRAM.into());
        let document = args
            .next()
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingDocumentPath { program })?;

        let ignored: Vec<String> = args.collect();
        if !ignored.is_empty() {
            log::warn!("ignoring extra arguments: {ignored:?}");
        }

        Ok(Self {
            document,
            window_size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            scene: SceneConfig::default(),
        })
    }
}
