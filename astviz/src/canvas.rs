//! Canvas widget that replays a recorded frame and reports pointer input.

use astviz_scene::{DisplayList, DrawCommand, PointerEvent, style};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Event, Point, Rectangle, Renderer, Theme, mouse};

use crate::app::AppEvent;
use crate::font::LABEL_SHAPING;
use crate::input;

/// Concentric rings used to approximate a radial gradient.
const GRADIENT_RINGS: usize = 8;
const OUTLINE_WIDTH: f32 = 1.0;

/// Replays the latest [`DisplayList`] and turns mouse input into
/// [`PointerEvent`]s.
pub(crate) struct SceneCanvas<'a> {
    frame: &'a DisplayList,
}

impl<'a> SceneCanvas<'a> {
    pub(crate) fn new(frame: &'a DisplayList) -> Self {
        Self { frame }
    }
}

/// Canvas-local pointer state.
#[derive(Debug, Default)]
pub(crate) struct DragState {
    held: bool,
}

impl canvas::Program<AppEvent> for SceneCanvas<'_> {
    type State = DragState;

    fn update(
        &self,
        state: &mut DragState,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<AppEvent>> {
        let Event::Mouse(event) = event else {
            return None;
        };

        let pointer = match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                cursor.position_in(bounds)?;
                state.held = true;
                PointerEvent::Pressed(cursor.position()?)
            },
            mouse::Event::CursorMoved { position } if state.held => {
                PointerEvent::Moved(*position)
            },
            mouse::Event::ButtonReleased(mouse::Button::Left) if state.held => {
                state.held = false;
                PointerEvent::Released
            },
            mouse::Event::WheelScrolled { delta } => {
                cursor.position_in(bounds)?;
                PointerEvent::Scrolled(input::scroll_ticks(*delta))
            },
            _ => return None,
        };

        Some(canvas::Action::publish(AppEvent::Pointer(pointer)).and_capture())
    }

    fn draw(
        &self,
        _state: &DragState,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        for command in self.frame.commands() {
            replay(&mut frame, command);
        }
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &DragState,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.held {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::Idle
        }
    }
}

fn replay(frame: &mut Frame, command: &DrawCommand) {
    match command {
        DrawCommand::Clear(color) => {
            frame.fill_rectangle(Point::ORIGIN, frame.size(), *color);
        },
        DrawCommand::FillCircle {
            center,
            radius,
            inner,
            outer,
        } => fill_radial(frame, *center, *radius, *inner, *outer),
        DrawCommand::StrokeCircle {
            center,
            radius,
            color,
        } => {
            frame.stroke(
                &Path::circle(*center, *radius),
                stroke(OUTLINE_WIDTH, *color),
            );
        },
        DrawCommand::Text {
            content,
            position,
            size,
            color,
        } => {
            frame.fill_text(Text {
                content: content.clone(),
                position: *position,
                color: *color,
                size: (*size).into(),
                shaping: LABEL_SHAPING,
                ..Text::default()
            });
        },
        DrawCommand::QuadraticCurve {
            start,
            end,
            control,
            thickness,
            color,
        } => {
            let curve = Path::new(|builder| {
                builder.move_to(*start);
                builder.quadratic_curve_to(*control, *end);
            });
            frame.stroke(&curve, stroke(*thickness, *color));
        },
        DrawCommand::FillRect {
            top_left,
            size,
            color,
        } => frame.fill_rectangle(*top_left, *size, *color),
        DrawCommand::StrokeRect {
            top_left,
            size,
            color,
        } => {
            frame.stroke(
                &Path::rectangle(*top_left, *size),
                stroke(OUTLINE_WIDTH, *color),
            );
        },
    }
}

/// Paint rings from the rim inwards, blending `outer` towards `inner`.
fn fill_radial(
    frame: &mut Frame,
    center: Point,
    radius: f32,
    inner: Color,
    outer: Color,
) {
    if radius <= 0.0 {
        return;
    }

    for ring in (0..GRADIENT_RINGS).rev() {
        let t = ring as f32 / (GRADIENT_RINGS - 1) as f32;
        let ring_radius = radius * (ring + 1) as f32 / GRADIENT_RINGS as f32;
        frame.fill(
            &Path::circle(center, ring_radius),
            style::lerp(inner, outer, t),
        );
    }
}

fn stroke(width: f32, color: Color) -> Stroke<'static> {
    Stroke::default().with_width(width).with_color(color)
}
