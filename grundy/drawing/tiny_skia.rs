//! Canvas that can draw to PNG

use crate::{
    drawing::{BoundingBox, Color},
    error::Error,
    numeric::v2f::V2f,
};

/// Raster canvas backed by a [`tiny_skia::Pixmap`] with a white background
pub struct Canvas {
    pixmap: tiny_skia::Pixmap,
}

impl Canvas {
    /// Create a canvas big enough for `bounding_box`
    ///
    /// # Errors
    ///
    /// - [`Error::Render`] if the bounding box is empty or too large
    pub fn new(bounding_box: BoundingBox) -> Result<Canvas, Error> {
        let size = bounding_box.size();
        let mut pixmap = tiny_skia::Pixmap::new(size.x.ceil() as u32, size.y.ceil() as u32)
            .ok_or_else(|| Error::Render(format!("Invalid canvas size {}x{}", size.x, size.y)))?;
        pixmap.fill(tiny_skia::Color::from(Color::WHITE));
        Ok(Canvas { pixmap })
    }

    /// Encode the canvas as PNG
    ///
    /// # Errors
    ///
    /// - [`Error::Render`] if PNG encoding fails
    pub fn to_png(&self) -> Result<Vec<u8>, Error> {
        self.pixmap
            .encode_png()
            .map_err(|err| Error::Render(err.to_string()))
    }
}

impl super::Canvas for Canvas {
    fn rect(&mut self, position: V2f, size: V2f, color: Color) {
        // Degenerate rectangles are not drawn
        if let Some(rect) = tiny_skia::Rect::from_xywh(position.x, position.y, size.x, size.y) {
            self.pixmap.fill_rect(
                rect,
                &paint_solid_color(color),
                tiny_skia::Transform::identity(),
                None,
            );
        }
    }

    fn circle(&mut self, position: V2f, radius: f32, color: Color) {
        if let Some(path) = tiny_skia::PathBuilder::from_circle(position.x, position.y, radius) {
            self.pixmap.fill_path(
                &path,
                &paint_solid_color(color),
                tiny_skia::FillRule::Winding,
                tiny_skia::Transform::identity(),
                None,
            );
        }
    }

    fn line(&mut self, start: V2f, end: V2f, weight: f32, color: Color) {
        let mut path = tiny_skia::PathBuilder::with_capacity(2, 2);
        path.move_to(start.x, start.y);
        path.line_to(end.x, end.y);
        if let Some(path) = path.finish() {
            self.pixmap.stroke_path(
                &path,
                &paint_solid_color(color),
                &tiny_skia::Stroke {
                    width: weight,
                    ..tiny_skia::Stroke::default()
                },
                tiny_skia::Transform::identity(),
                None,
            );
        }
    }

    fn thick_line_weight() -> f32 {
        2.0
    }
}

fn paint_solid_color(color: Color) -> tiny_skia::Paint<'static> {
    let mut paint = tiny_skia::Paint::default();
    paint.set_color(tiny_skia::Color::from(color));
    paint.anti_alias = true;
    paint
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::Canvas as _;

    #[test]
    fn encodes_png() {
        let mut canvas = Canvas::new(BoundingBox {
            top_left: V2f::ZERO,
            bottom_right: V2f { x: 16.0, y: 16.0 },
        })
        .unwrap();
        canvas.line(V2f::ZERO, V2f { x: 16.0, y: 16.0 }, 2.0, Color::BLUE);
        canvas.circle(V2f { x: 8.0, y: 8.0 }, 3.0, Color::RED);

        let png = canvas.to_png().unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    fn empty_canvas_is_rejected() {
        let canvas = Canvas::new(BoundingBox {
            top_left: V2f::ZERO,
            bottom_right: V2f::ZERO,
        });
        assert!(matches!(canvas, Err(Error::Render(_))));
    }
}
