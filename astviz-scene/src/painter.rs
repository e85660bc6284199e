//! Drawing collaborator contract and a recording implementation.

use iced_core::{Color, Point, Size};

/// Text metrics supplied by the toolkit that will display the text.
pub trait TextMeasure {
    fn text_width(&self, text: &str, size: f32) -> f32;
}

/// Immediate-mode drawing primitives consumed by the renderer.
pub trait Painter {
    /// Fill the whole surface.
    fn clear(&mut self, color: Color);
    /// Fill a circle with a radial gradient from `inner` to `outer`.
    fn fill_circle(
        &mut self,
        center: Point,
        radius: f32,
        inner: Color,
        outer: Color,
    );
    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color);
    /// Draw `text` with its top-left corner at `position`.
    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        size: f32,
        color: Color,
    );
    /// Width of `text` rendered at `size`.
    fn measure_text_width(&self, text: &str, size: f32) -> f32;
    fn draw_quadratic_curve(
        &mut self,
        start: Point,
        end: Point,
        control: Point,
        thickness: f32,
        color: Color,
    );
    fn fill_rect(&mut self, top_left: Point, size: Size, color: Color);
    fn stroke_rect(&mut self, top_left: Point, size: Size, color: Color);
    /// Seconds since the viewer started.
    fn now(&self) -> f32;
}

/// One recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillCircle {
        center: Point,
        radius: f32,
        inner: Color,
        outer: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    Text {
        content: String,
        position: Point,
        size: f32,
        color: Color,
    },
    QuadraticCurve {
        start: Point,
        end: Point,
        control: Point,
        thickness: f32,
        color: Color,
    },
    FillRect {
        top_left: Point,
        size: Size,
        color: Color,
    },
    StrokeRect {
        top_left: Point,
        size: Size,
        color: Color,
    },
}

/// Draw commands recorded for one frame.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of node bodies (filled circles) in the list.
    pub fn node_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::FillCircle { .. }))
            .count()
    }

    /// Number of parent-child connectors in the list.
    pub fn edge_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| {
                matches!(command, DrawCommand::QuadraticCurve { .. })
            })
            .count()
    }
}

/// A [`Painter`] that records into a [`DisplayList`] and asks `measure`
/// for text widths.
pub struct Recorder<'m, M: ?Sized> {
    list: DisplayList,
    time: f32,
    measure: &'m M,
}

impl<'m, M: TextMeasure + ?Sized> Recorder<'m, M> {
    /// Start recording a frame at `time` seconds.
    pub fn new(time: f32, measure: &'m M) -> Self {
        Self {
            list: DisplayList::default(),
            time,
            measure,
        }
    }

    pub fn finish(self) -> DisplayList {
        self.list
    }

    fn push(&mut self, command: DrawCommand) {
        self.list.commands.push(command);
    }
}

impl<M: TextMeasure + ?Sized> Painter for Recorder<'_, M> {
    fn clear(&mut self, color: Color) {
        self.push(DrawCommand::Clear(color));
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f32,
        inner: Color,
        outer: Color,
    ) {
        self.push(DrawCommand::FillCircle {
            center,
            radius,
            inner,
            outer,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        size: f32,
        color: Color,
    ) {
        self.push(DrawCommand::Text {
            content: text.to_owned(),
            position,
            size,
            color,
        });
    }

    fn measure_text_width(&self, text: &str, size: f32) -> f32 {
        self.measure.text_width(text, size)
    }

    fn draw_quadratic_curve(
        &mut self,
        start: Point,
        end: Point,
        control: Point,
        thickness: f32,
        color: Color,
    ) {
        self.push(DrawCommand::QuadraticCurve {
            start,
            end,
            control,
            thickness,
            color,
        });
    }

    fn fill_rect(&mut self, top_left: Point, size: Size, color: Color) {
        self.push(DrawCommand::FillRect {
            top_left,
            size,
            color,
        });
    }

    fn stroke_rect(&mut self, top_left: Point, size: Size, color: Color) {
        self.push(DrawCommand::StrokeRect {
            top_left,
            size,
            color,
        });
    }

    fn now(&self) -> f32 {
        self.time
    }
}

/// Fixed-advance metrics for tests: `W` and `M` are wide, `i`, `l` and
/// `.` narrow, everything else average.
#[cfg(test)]
pub(crate) struct TestMeasure;

#[cfg(test)]
impl TextMeasure for TestMeasure {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars()
            .map(|ch| match ch {
                'W' | 'M' => 0.9,
                'i' | 'l' | '.' => 0.3,
                _ => 0.6,
            })
            .sum::<f32>()
            * size
    }
}
