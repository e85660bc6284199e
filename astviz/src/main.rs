mod app;
mod canvas;
mod config;
mod errors;
mod font;
mod input;

use anyhow::{Context, Result};
use astviz_scene::load_document;
use env_logger::Env;
use iced::window;

use crate::app::App;
use crate::config::AppConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = AppConfig::from_args(std::env::args())?;
    let root = load_document(&config.document).with_context(|| {
        format!("failed to load {}", config.document.display())
    })?;

    let window_size = config.window_size;
    iced::application(
        move || App::new(root.clone(), &config),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .antialiasing(true)
    .window(window::Settings {
        size: window_size,
        ..window::Settings::default()
    })
    .subscription(App::subscription)
    .run()?;

    Ok(())
}
