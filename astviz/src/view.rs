use iced::widget::canvas;
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::canvas::SceneCanvas;

/// Full-window canvas showing the last recorded frame.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    canvas(SceneCanvas::new(&app.frame))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
