//! Label metrics from iced's text shaping.

use std::cell::RefCell;
use std::collections::HashMap;

use astviz_scene::TextMeasure;
use iced::{Font, Size};
use iced_core::Text;
use iced_core::alignment::Vertical;
use iced_core::text::{
    Alignment, LineHeight, Paragraph, Shaping as TextShaping, Wrapping,
};
use iced_graphics::text::paragraph;

/// Shaping used both when measuring and when drawing labels.
pub(crate) const LABEL_SHAPING: TextShaping = TextShaping::Advanced;

/// Measures label widths with the same font the canvas draws with.
///
/// Labels repeat every frame, so widths are cached per text and size.
#[derive(Debug)]
pub(crate) struct LabelMeasure {
    font: Font,
    cache: RefCell<HashMap<(String, u32), f32>>,
}

impl LabelMeasure {
    pub(crate) fn new(font: Font) -> Self {
        Self {
            font,
            cache: RefCell::default(),
        }
    }

    #[cfg(test)]
    fn cached(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl TextMeasure for LabelMeasure {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }

        let key = (text.to_owned(), size.to_bits());
        if let Some(width) = self.cache.borrow().get(&key) {
            return *width;
        }

        let width = text_bounds(text, size, self.font).width;
        self.cache.borrow_mut().insert(key, width);
        width
    }
}

fn text_bounds(content: &str, font_size: f32, font: Font) -> Size<f32> {
    let paragraph = paragraph::Paragraph::with_text(Text {
        content,
        font,
        size: iced_core::Pixels(font_size),
        align_y: Vertical::Top,
        align_x: Alignment::Left,
        shaping: LABEL_SHAPING,
        line_height: LineHeight::default(),
        bounds: Size::INFINITE,
        wrapping: Wrapping::None,
    });

    paragraph.min_bounds()
}
