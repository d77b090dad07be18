//! The image composer.
//!
//! [`compose`] turns a [`Diagram`] description into a finished pixel
//! buffer: fill the background, draw the centered title, then draw each
//! box as an outlined rectangle with its label centered inside. The
//! result is written out with [`save_png`].
//!
//! Text is rasterized glyph by glyph with coverage-weighted blending into
//! the RGB canvas. Centering follows "mm" anchor semantics: the text block
//! is centered both horizontally and vertically on the anchor point, with
//! embedded line breaks preserved.

use std::path::Path;

use image::{ImageFormat, RgbImage};
use log::debug;
use rusttype::point;

use crate::{
    color::Color,
    diagram::Diagram,
    error::FlowplateError,
    font::{FontSet, SizedFont},
    geometry::{Point, Rect},
};

/// The in-memory canvas the composer draws on
#[derive(Debug)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Allocates a canvas filled with the background color
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background.to_pixel()),
        }
    }

    /// Returns the finished pixel buffer
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Draws a non-filled rectangle outline.
    ///
    /// The stroke grows inward from the bounds, one concentric
    /// one-pixel ring per unit of `stroke_width`, so the outer ring sits
    /// exactly on the rect's edge coordinates.
    pub fn draw_box_outline(&mut self, bounds: Rect, color: Color, stroke_width: u32) {
        for ring in 0..stroke_width {
            self.draw_ring(bounds.inset(ring as i32), color);
        }
    }

    fn draw_ring(&mut self, rect: Rect, color: Color) {
        if rect.width() < 0 || rect.height() < 0 {
            return;
        }
        let pixel = color.to_pixel();
        for x in rect.left()..=rect.right() {
            self.put_pixel(x, rect.top(), pixel);
            self.put_pixel(x, rect.bottom(), pixel);
        }
        for y in rect.top()..=rect.bottom() {
            self.put_pixel(rect.left(), y, pixel);
            self.put_pixel(rect.right(), y, pixel);
        }
    }

    /// Draws text centered on `anchor`, preserving embedded line breaks.
    ///
    /// Each line is centered horizontally; the whole block is centered
    /// vertically.
    pub fn draw_text_centered(&mut self, anchor: Point, text: &str, face: &SizedFont, color: Color) {
        let metrics = face.font().v_metrics(face.scale());
        let line_height = metrics.ascent - metrics.descent + metrics.line_gap;

        let lines: Vec<&str> = text.split('\n').collect();
        let block_height = line_height * lines.len() as f32;

        let mut baseline = anchor.y() as f32 - block_height / 2.0 + metrics.ascent;
        for line in lines {
            let width = line_width(face, line);
            let x = anchor.x() as f32 - width / 2.0;
            self.draw_text_line(line, x, baseline, face, color);
            baseline += line_height;
        }
    }

    fn draw_text_line(&mut self, line: &str, x: f32, baseline: f32, face: &SizedFont, color: Color) {
        for glyph in face.font().layout(line, face.scale(), point(x, baseline)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                self.blend_pixel(gx as i32 + bb.min.x, gy as i32 + bb.min.y, color, coverage);
            });
        }
    }

    /// Blends `color` into the canvas at glyph coverage `alpha` (0..=1)
    fn blend_pixel(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if alpha <= 0.0 || x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.image.width() || y >= self.image.height() {
            return;
        }

        let src = color.channels_f32();
        let dst = self.image.get_pixel_mut(x, y);
        let inv = 1.0 - alpha;
        for channel in 0..3 {
            dst.0[channel] = (src[channel] * alpha + dst.0[channel] as f32 * inv) as u8;
        }
    }

    fn put_pixel(&mut self, x: i32, y: i32, pixel: image::Rgb<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, pixel);
        }
    }
}

fn line_width(face: &SizedFont, line: &str) -> f32 {
    face.font()
        .layout(line, face.scale(), point(0.0, 0.0))
        .last()
        .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

/// Composes the diagram into a finished pixel buffer.
///
/// Straight-line sequence: background fill, centered title, then one
/// outlined rectangle plus centered label per box descriptor.
pub fn compose(diagram: &Diagram, fonts: &FontSet) -> RgbImage {
    let mut canvas = Canvas::new(diagram.width(), diagram.height(), diagram.background());

    canvas.draw_text_centered(
        diagram.title_anchor(),
        diagram.title(),
        fonts.title(),
        diagram.title_color(),
    );

    for spec in diagram.boxes() {
        debug!(label = spec.label(); "Drawing box");
        canvas.draw_box_outline(spec.bounds(), diagram.outline_color(), diagram.stroke_width());
        canvas.draw_text_centered(
            spec.bounds().center(),
            spec.label(),
            fonts.label(),
            diagram.label_color(),
        );
    }

    canvas.into_image()
}

/// Writes the pixel buffer to `path` as a PNG, overwriting any existing
/// file.
///
/// # Errors
///
/// Returns an error if the target directory does not exist, is not
/// writable, or PNG encoding fails. The directory is never created here.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<(), FlowplateError> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn test_fonts() -> FontSet {
        // Force the embedded default so results don't depend on the host
        FontSet::load_from(&[])
    }

    fn background_pixel(diagram: &Diagram) -> image::Rgb<u8> {
        diagram.background().to_pixel()
    }

    #[test]
    fn composed_image_has_fixed_dimensions() {
        let diagram = Diagram::fintech_placeholder();
        let image = compose(&diagram, &test_fonts());
        assert_eq!(image.dimensions(), (1200, 600));
    }

    #[test]
    fn box_borders_carry_the_outline_color() {
        let diagram = Diagram::fintech_placeholder();
        let image = compose(&diagram, &test_fonts());
        let outline = diagram.outline_color().to_pixel();

        for spec in diagram.boxes() {
            let bounds = spec.bounds();
            let cx = bounds.center().x() as u32;
            // Wide labels may overhang the box sides, so sample the
            // vertical borders near the top, clear of any glyph rows
            let edge_y = (bounds.top() + 10) as u32;
            assert_eq!(*image.get_pixel(cx, bounds.top() as u32), outline);
            assert_eq!(*image.get_pixel(cx, bounds.bottom() as u32), outline);
            assert_eq!(*image.get_pixel(bounds.left() as u32, edge_y), outline);
            assert_eq!(*image.get_pixel(bounds.right() as u32, edge_y), outline);
        }
    }

    #[test]
    fn box_interiors_are_not_filled() {
        let diagram = Diagram::fintech_placeholder();
        let image = compose(&diagram, &test_fonts());
        let background = background_pixel(&diagram);

        // Just inside the stroke of box 1, away from any label glyphs
        assert_eq!(*image.get_pixel(160, 160), background);
    }

    #[test]
    fn title_region_differs_from_background() {
        let diagram = Diagram::fintech_placeholder();
        let image = compose(&diagram, &test_fonts());
        let background = background_pixel(&diagram);

        let mut inked = 0;
        for y in 30..70 {
            for x in 450..750 {
                if *image.get_pixel(x, y) != background {
                    inked += 1;
                }
            }
        }
        assert!(inked > 0, "title was not drawn near (600, 50)");
    }

    #[test]
    fn multi_line_labels_ink_inside_their_box() {
        let diagram = Diagram::fintech_placeholder();
        let image = compose(&diagram, &test_fonts());
        let background = background_pixel(&diagram);

        // Box 1 has a two-line label centered on (250, 210)
        let bounds = diagram.boxes()[0].bounds();
        let mut inked = 0;
        for y in (bounds.top() + 4) as u32..(bounds.bottom() - 3) as u32 {
            for x in (bounds.left() + 4) as u32..(bounds.right() - 3) as u32 {
                if *image.get_pixel(x, y) != background {
                    inked += 1;
                }
            }
        }
        assert!(inked > 0, "label glyphs missing inside box 1");
    }

    #[test]
    fn outline_stroke_grows_inward() {
        let mut canvas = Canvas::new(100, 100, Color::from_rgb(0, 0, 0));
        let color = Color::from_rgb(0xFF, 0x00, 0x00);
        canvas.draw_box_outline(Rect::new(10, 10, 90, 90), color, 3);
        let image = canvas.into_image();

        // Stroke rings at offsets 0..3 inside the edge, background beyond
        assert_eq!(*image.get_pixel(50, 10), color.to_pixel());
        assert_eq!(*image.get_pixel(50, 12), color.to_pixel());
        assert_eq!(*image.get_pixel(50, 9), image::Rgb([0, 0, 0]));
        assert_eq!(*image.get_pixel(50, 13), image::Rgb([0, 0, 0]));
    }

    #[test]
    fn drawing_is_clipped_to_the_canvas() {
        let mut canvas = Canvas::new(50, 50, Color::from_rgb(0, 0, 0));
        canvas.draw_box_outline(Rect::new(-10, -10, 60, 60), Color::from_rgb(1, 2, 3), 2);
        let image = canvas.into_image();
        assert_eq!(image.dimensions(), (50, 50));
    }
}
