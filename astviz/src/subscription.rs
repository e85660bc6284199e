use iced::{Subscription, window};

use crate::app::{App, AppEvent};

/// Build the active subscription set.
pub(super) fn subscription(_app: &App) -> Subscription<AppEvent> {
    let frame_subs = window::frames().map(AppEvent::Frame);
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);

    Subscription::batch(vec![frame_subs, win_subs, key_subs])
}
