//! Translation of iced input into scene events.

use astviz_scene::QueryEvent;
use iced::keyboard::{self, Key, key::Named};
use iced::mouse::ScrollDelta;

/// Pixel scroll distance treated as one wheel tick.
const PIXELS_PER_TICK: f32 = 50.0;

/// Query events carried by a keyboard event.
///
/// A held Enter toggles once; auto-repeat only applies to editing keys.
pub(crate) fn query_events(event: &keyboard::Event) -> Vec<QueryEvent> {
    match event {
        keyboard::Event::KeyPressed {
            key, text, repeat, ..
        } => query_events_for(key, text.as_deref(), *repeat),
        _ => Vec::new(),
    }
}

fn query_events_for(
    key: &Key,
    text: Option<&str>,
    repeat: bool,
) -> Vec<QueryEvent> {
    match key {
        Key::Named(Named::Enter) if repeat => Vec::new(),
        Key::Named(Named::Enter) => vec![QueryEvent::Toggle],
        Key::Named(Named::Backspace) => vec![QueryEvent::DeleteLast],
        _ => text
            .unwrap_or_default()
            .chars()
            .map(QueryEvent::Insert)
            .collect(),
    }
}

/// Wheel ticks for a scroll delta; positive zooms in.
pub(crate) fn scroll_ticks(delta: ScrollDelta) -> f32 {
    match delta {
        ScrollDelta::Lines { y, .. } => y,
        ScrollDelta::Pixels { y, .. } => y / PIXELS_PER_TICK,
    }
}
