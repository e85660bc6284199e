use astviz_scene::QueryOutcome;
use iced::time::Instant;
use iced::{Task, window};

use super::{App, AppEvent};
use crate::input;

/// Apply one event to the app state.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Frame(now) => record_frame(app, now),
        AppEvent::Pointer(event) => app.scene.handle_pointer(event),
        AppEvent::Keyboard(event) => {
            for query_event in input::query_events(&event) {
                let outcome = app.scene.handle_query(query_event);
                if let QueryOutcome::Committed {
                    matched: Some(false),
                } = outcome
                {
                    log::info!(
                        "no node matches {:?}",
                        app.scene.query().text()
                    );
                }
            }
        },
        AppEvent::Window(window::Event::Resized(size)) => {
            app.window_size = size;
        },
        AppEvent::Window(_) => {},
    }

    Task::none()
}

/// Lay out, animate and record the tree for the frame presented at `now`.
fn record_frame(app: &mut App, now: Instant) {
    let time = now.duration_since(app.started).as_secs_f32();
    app.frame = app.scene.frame(app.window_size, time, &app.labels);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use astviz_scene::{Node, PointerEvent, QueryEvent};
    use iced::{Point, Size};

    use super::*;
    use crate::config::AppConfig;

    fn app() -> App {
        let root = Node::with_children(
            "A",
            vec![
                Node::leaf("B"),
                Node::with_children("C", vec![Node::leaf("D")]),
            ],
        );
        let config = AppConfig::from_args(vec![
            String::from("astviz"),
            String::from("ast.json"),
        ])
        .expect("config should parse");
        App::new(root, &config).0
    }

    #[test]
    fn given_frame_tick_when_updated_then_display_list_is_recorded() {
        let mut app = app();
        let now = app.started + Duration::from_millis(16);

        let _task = update(&mut app, AppEvent::Frame(now));

        assert_eq!(app.frame.node_count(), 4);
        assert_eq!(app.frame.edge_count(), 3);
    }

    #[test]
    fn given_pointer_drag_when_updated_then_scene_pans() {
        let mut app = app();

        let _ = update(
            &mut app,
            AppEvent::Pointer(PointerEvent::Pressed(Point::new(0.0, 0.0))),
        );
        let _ = update(
            &mut app,
            AppEvent::Pointer(PointerEvent::Moved(Point::new(30.0, 40.0))),
        );

        let offset = app.scene.viewport().transform().offset;
        assert_eq!((offset.x, offset.y), (30.0, 40.0));
    }

    #[test]
    fn given_resize_when_updated_then_overlay_uses_new_size() {
        let mut app = app();

        let _ = update(
            &mut app,
            AppEvent::Window(window::Event::Resized(Size::new(800.0, 600.0))),
        );

        assert_eq!(app.window_size, Size::new(800.0, 600.0));
    }

    #[test]
    fn given_scene_when_query_handled_then_highlights_follow_commit() {
        let mut app = app();

        app.scene.handle_query(QueryEvent::Toggle);
        app.scene.handle_query(QueryEvent::Insert('D'));
        app.scene.handle_query(QueryEvent::Toggle);

        assert_eq!(app.scene.root().highlighted_labels(), vec!["A", "C", "D"]);
    }
}
