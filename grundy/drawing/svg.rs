//! Canvas that renders to an SVG document

use crate::{
    drawing::{BoundingBox, Color},
    numeric::v2f::V2f,
};
use std::fmt::Write;

/// SVG text element anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// The rendered characters are aligned such that the start of the text string is at the
    /// initial current text position
    Start,

    /// The rendered characters are aligned such that the middle of the text string is at the
    /// current text position
    Middle,

    /// The rendered characters are shifted such that the end of the resulting rendered text
    End,
}

impl TextAnchor {
    /// Get text anchor as string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Immediate mode SVG canvas. Elements are appended to the document in drawing order.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: V2f,
    body: String,
}

impl Canvas {
    /// Create an empty canvas big enough for `bounding_box`
    pub fn new(bounding_box: BoundingBox) -> Canvas {
        Canvas {
            size: bounding_box.size(),
            body: String::new(),
        }
    }

    /// Render the complete SVG document
    pub fn to_svg(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">{}</svg>",
            self.size.x, self.size.y, self.body
        )
    }

    /// Create [text element](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/text)
    pub fn anchored_text(&mut self, position: V2f, text: &str, anchor: TextAnchor, color: Color) {
        // Writing to a String cannot fail
        let _ = write!(
            self.body,
            "<text text-anchor=\"{}\" x=\"{}\" y=\"{}\" fill=\"{}\" font-family=\"sans-serif\" font-size=\"14\">{}</text>",
            anchor.as_str(),
            position.x,
            position.y,
            color.to_css(),
            escape(text),
        );
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}

impl super::Canvas for Canvas {
    fn rect(&mut self, position: V2f, size: V2f, color: Color) {
        let _ = write!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            position.x,
            position.y,
            size.x,
            size.y,
            color.to_css(),
        );
    }

    fn circle(&mut self, position: V2f, radius: f32, color: Color) {
        let _ = write!(
            self.body,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            position.x,
            position.y,
            radius,
            color.to_css(),
        );
    }

    fn line(&mut self, start: V2f, end: V2f, weight: f32, color: Color) {
        let _ = write!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            start.x,
            start.y,
            end.x,
            end.y,
            color.to_css(),
            weight,
        );
    }

    fn text(&mut self, position: V2f, text: &str, color: Color) {
        self.anchored_text(position, text, TextAnchor::Middle, color);
    }

    fn thick_line_weight() -> f32 {
        2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::Canvas as _;

    #[test]
    fn renders_elements() {
        let mut canvas = Canvas::new(BoundingBox {
            top_left: V2f::ZERO,
            bottom_right: V2f { x: 20.0, y: 10.0 },
        });
        canvas.line(V2f::ZERO, V2f { x: 5.0, y: 5.0 }, 1.0, Color::BLACK);
        canvas.text(V2f { x: 10.0, y: 5.0 }, "a<b", Color::RED);

        assert_eq!(
            canvas.to_svg(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"20\" height=\"10\">\
             <line x1=\"0\" y1=\"0\" x2=\"5\" y2=\"5\" stroke=\"#000000\" stroke-width=\"1\"/>\
             <text text-anchor=\"middle\" x=\"10\" y=\"5\" fill=\"#d62728\" font-family=\"sans-serif\" font-size=\"14\">a&lt;b</text>\
             </svg>"
        );
    }
}
