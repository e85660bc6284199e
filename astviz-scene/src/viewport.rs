//! Pan/zoom view state and the layout-to-screen transform.

use iced_core::{Point, Vector};

pub const MIN_ZOOM: f32 = 0.2;
pub const MAX_ZOOM: f32 = 3.0;
/// Zoom change per wheel tick.
pub const DEFAULT_ZOOM_SPEED: f32 = 0.1;

/// Pan offset and zoom factor shared by every node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub offset: Vector,
    pub zoom: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            offset: Vector::new(0.0, 0.0),
            zoom: 1.0,
        }
    }
}

impl ViewTransform {
    /// Map a layout-space point to screen space: `(p + offset) * zoom`.
    pub fn to_screen(&self, layout: Point) -> Point {
        Point::new(
            (layout.x + self.offset.x) * self.zoom,
            (layout.y + self.offset.y) * self.zoom,
        )
    }

    /// Pan by an on-screen delta, scaled so the content tracks the pointer
    /// at any zoom level.
    pub fn pan(&mut self, screen_delta: Vector) {
        self.offset = self.offset + screen_delta * (1.0 / self.zoom);
    }

    /// Adjust zoom by `ticks * speed`, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn zoom_by(&mut self, ticks: f32, speed: f32) {
        let zoom = self.zoom + ticks * speed;
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
            log::trace!("zoom {zoom} clamped");
        }
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

/// Pointer input relevant to panning and zooming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button went down at a screen position.
    Pressed(Point),
    /// Pointer moved to a screen position.
    Moved(Point),
    /// Primary button was released.
    Released,
    /// Wheel moved by a number of ticks (positive zooms in).
    Scrolled(f32),
}

/// View state: transform plus drag tracking.
#[derive(Debug, Clone)]
pub struct Viewport {
    transform: ViewTransform,
    drag_origin: Option<Point>,
    zoom_speed: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_SPEED)
    }
}

impl Viewport {
    pub fn new(zoom_speed: f32) -> Self {
        Self {
            transform: ViewTransform::default(),
            drag_origin: None,
            zoom_speed,
        }
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Pressed(position) => {
                self.drag_origin = Some(position);
            },
            PointerEvent::Moved(position) => {
                if let Some(origin) = self.drag_origin {
                    self.transform.pan(position - origin);
                    self.drag_origin = Some(position);
                }
            },
            PointerEvent::Released => self.drag_origin = None,
            PointerEvent::Scrolled(ticks) => {
                self.transform.zoom_by(ticks, self.zoom_speed);
            },
        }
    }
}
