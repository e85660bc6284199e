//! Colours used by the tree and the overlay.

use iced_core::Color;

const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color {
        r: r as f32 / 255.0,
        g: g as f32 / 255.0,
        b: b as f32 / 255.0,
        a: 1.0,
    }
}

pub const SKY_BLUE: Color = rgb8(102, 191, 255);
pub const ORANGE: Color = rgb8(255, 161, 0);
pub const DARK_BLUE: Color = rgb8(0, 82, 172);
pub const LIGHT_GRAY: Color = rgb8(200, 200, 200);
pub const GRAY: Color = rgb8(130, 130, 130);
pub const WHITE: Color = Color::WHITE;
pub const BLACK: Color = Color::BLACK;

/// Copy of `color` with its alpha multiplied by `alpha`.
pub fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Linear interpolation between two colours, channel by channel.
pub fn lerp(from: Color, to: Color, t: f32) -> Color {
    Color {
        r: from.r + t * (to.r - from.r),
        g: from.g + t * (to.g - from.g),
        b: from.b + t * (to.b - from.b),
        a: from.a + t * (to.a - from.a),
    }
}

/// Opaque colour from hue (degrees), saturation and value in `[0, 1]`.
pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Color {
    let hue = hue.rem_euclid(360.0);
    let chroma = value * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = value - chroma;
    Color::from_rgb(r + m, g + m, b + m)
}
