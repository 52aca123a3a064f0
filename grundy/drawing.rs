#![allow(missing_docs)]

//! Drawing module

use crate::numeric::v2f::V2f;

pub mod svg;

#[cfg(feature = "tiny_skia")]
pub mod tiny_skia;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[allow(clippy::unreadable_literal)]
    pub const BLUE: Color = Color::from_hex(0x1f77b4ff);

    #[allow(clippy::unreadable_literal)]
    pub const RED: Color = Color::from_hex(0xd62728ff);

    #[allow(clippy::unreadable_literal)]
    pub const ORANGE: Color = Color::from_hex(0xff7f0eff);

    #[allow(clippy::unreadable_literal)]
    pub const BLACK: Color = Color::from_hex(0x000000ff);

    #[allow(clippy::unreadable_literal)]
    pub const WHITE: Color = Color::from_hex(0xffffffff);

    #[allow(clippy::unreadable_literal)]
    pub const LIGHT_GRAY: Color = Color::from_hex(0xccccccff);

    #[must_use]
    pub const fn from_hex(hex: u32) -> Color {
        Color {
            r: ((hex >> 24) & 0xff) as u8,
            g: ((hex >> 16) & 0xff) as u8,
            b: ((hex >> 8) & 0xff) as u8,
            a: (hex & 0xff) as u8,
        }
    }

    /// CSS notation, `#rrggbb` followed by alpha when not opaque
    pub fn to_css(self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

#[cfg(feature = "tiny_skia")]
impl From<Color> for ::tiny_skia::Color {
    fn from(color: Color) -> ::tiny_skia::Color {
        ::tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Anything that can be used for drawing
pub trait Canvas {
    fn rect(&mut self, position: V2f, size: V2f, color: Color);

    fn circle(&mut self, position: V2f, radius: f32, color: Color);

    fn line(&mut self, start: V2f, end: V2f, weight: f32, color: Color);

    /// Draw text with its baseline centered at `position`. Canvases without font support skip it.
    fn text(&mut self, _position: V2f, _text: &str, _color: Color) {}

    fn dashed_line(&mut self, start: V2f, end: V2f, weight: f32, color: Color) {
        let dash = Self::dash_length();
        let length = V2f::distance(start, end);
        let direction = V2f::direction(start, end);

        let mut offset = 0.0;
        while offset < length {
            let dash_end = (offset + dash).min(length);
            self.line(
                start + direction * offset,
                start + direction * dash_end,
                weight,
                color,
            );
            offset += dash * 2.0;
        }
    }

    fn dash_length() -> f32 {
        6.0
    }

    fn thick_line_weight() -> f32;

    fn thin_line_weight() -> f32 {
        Self::thick_line_weight() * 0.5
    }

    fn marker_radius() -> f32 {
        Self::thick_line_weight() * 1.5
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BoundingBox {
    pub top_left: V2f,
    pub bottom_right: V2f,
}

impl BoundingBox {
    pub fn size(self) -> V2f {
        self.bottom_right - self.top_left
    }
}

pub trait Draw {
    /// Paint the object on existing canvas
    fn draw<C>(&self, canvas: &mut C)
    where
        C: Canvas;

    /// Minimum required canvas size to paint the whole object
    fn required_canvas<C>(&self) -> BoundingBox
    where
        C: Canvas;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        lines: Vec<(V2f, V2f)>,
    }

    impl Canvas for Recorder {
        fn rect(&mut self, _position: V2f, _size: V2f, _color: Color) {}

        fn circle(&mut self, _position: V2f, _radius: f32, _color: Color) {}

        fn line(&mut self, start: V2f, end: V2f, _weight: f32, _color: Color) {
            self.lines.push((start, end));
        }

        fn thick_line_weight() -> f32 {
            2.0
        }
    }

    #[test]
    fn dashed_line_is_split() {
        let mut canvas = Recorder::default();
        canvas.dashed_line(V2f::ZERO, V2f { x: 0.0, y: 30.0 }, 1.0, Color::BLACK);
        assert_eq!(
            canvas.lines,
            vec![
                (V2f { x: 0.0, y: 0.0 }, V2f { x: 0.0, y: 6.0 }),
                (V2f { x: 0.0, y: 12.0 }, V2f { x: 0.0, y: 18.0 }),
                (V2f { x: 0.0, y: 24.0 }, V2f { x: 0.0, y: 30.0 }),
            ]
        );
    }

    #[test]
    fn css_colors() {
        assert_eq!(Color::RED.to_css(), "#d62728");
        assert_eq!(Color::from_hex(0x11223380).to_css(), "#11223380");
    }
}
