#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use astviz_scene::{DisplayList, Node, PointerEvent, Scene};
use iced::time::Instant;
use iced::{Element, Size, Subscription, Task, Theme};

use crate::config::{AppConfig, WINDOW_TITLE};
use crate::font::LabelMeasure;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    /// The window is about to present a new frame.
    Frame(Instant),
    /// Pan/zoom input from the canvas.
    Pointer(PointerEvent),
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) scene: Scene,
    /// Draw calls recorded for the most recent frame.
    pub(crate) frame: DisplayList,
    pub(crate) labels: LabelMeasure,
    pub(crate) window_size: Size,
    pub(crate) started: Instant,
}

impl App {
    /// Initialize the application around an already loaded tree.
    pub(crate) fn new(
        root: Node,
        config: &AppConfig,
    ) -> (Self, Task<AppEvent>) {
        let app = App {
            scene: Scene::new(root, config.scene.clone()),
            frame: DisplayList::default(),
            labels: LabelMeasure::new(iced::Font::DEFAULT),
            window_size: config.window_size,
            started: Instant::now(),
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from(WINDOW_TITLE)
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
