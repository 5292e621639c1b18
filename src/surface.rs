//! Raster surface backed by a CPU pixmap, with image-buffer serialization.
//!
//! [`Surface`] is the 2D target glyphs are drawn onto: a fixed-size RGBA
//! pixmap supporting clear, fill, path fill, stroking, and the dot-matrix
//! text used by the diagnostic overlay. [`Surface::encode`] serializes the
//! pixel content into an encoded image buffer for export.

use std::io::Cursor;

use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::color::Color;
use crate::error::Result;

/// Encoded image format for surface serialization.
///
/// Parsed from a MIME-style identifier (`image/png`); unrecognized
/// subtypes fall back to PNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
    Webp,
}

impl ImageFormat {
    /// Parse a format identifier like `"image/png"`.
    ///
    /// The subtype decides the format; a missing or unrecognized subtype
    /// yields [`ImageFormat::Png`].
    pub fn from_mime(identifier: &str) -> Self {
        let subtype = match identifier.split_once('/') {
            Some((_, subtype)) => subtype,
            None => return ImageFormat::Png,
        };
        match subtype {
            "png" => ImageFormat::Png,
            "jpeg" | "jpg" => ImageFormat::Jpeg,
            "webp" => ImageFormat::Webp,
            _ => ImageFormat::Png,
        }
    }

    /// File extension for this format, the subtype verbatim.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Webp => "webp",
        }
    }
}

/// A fixed-size RGBA raster target.
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// Create a surface of the given size, starting fully transparent.
    ///
    /// Dimensions are clamped to at least 1 pixel so allocation cannot
    /// fail.
    pub fn new(width: u32, height: u32) -> Self {
        let pixmap =
            Pixmap::new(width.max(1), height.max(1)).expect("pixmap allocation for clamped size");
        Self { pixmap }
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Reset to the given size with fully transparent content,
    /// reallocating only when the size actually changes.
    pub fn reset(&mut self, width: u32, height: u32) {
        let (width, height) = (width.max(1), height.max(1));
        if self.width() != width || self.height() != height {
            self.pixmap = Pixmap::new(width, height).expect("pixmap allocation for clamped size");
        } else {
            self.clear();
        }
    }

    /// Clear every pixel to fully transparent.
    pub fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    /// Fill the whole surface with a color.
    pub fn fill(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    /// Fill an axis-aligned rectangle. Degenerate rectangles draw nothing.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        if let Some(rect) = tiny_skia::Rect::from_xywh(x, y, width, height) {
            self.pixmap.fill_rect(
                rect,
                &solid_paint(color, false),
                Transform::identity(),
                None,
            );
        }
    }

    /// Fill a path using the non-zero winding rule, anti-aliased.
    pub fn fill_path(&mut self, path: &Path, color: Color) {
        self.pixmap.fill_path(
            path,
            &solid_paint(color, true),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Stroke a path with a hairline of the given width.
    pub fn stroke_path(&mut self, path: &Path, color: Color, width: f32) {
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            path,
            &solid_paint(color, true),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    /// Stroke the border of an axis-aligned rectangle.
    pub fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let mut pb = PathBuilder::new();
        pb.move_to(x, y);
        pb.line_to(x + width, y);
        pb.line_to(x + width, y + height);
        pb.line_to(x, y + height);
        pb.close();
        if let Some(path) = pb.finish() {
            self.stroke_path(&path, color, 1.0);
        }
    }

    /// Draw a straight line segment.
    pub fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
        let mut pb = PathBuilder::new();
        pb.move_to(x1, y1);
        pb.line_to(x2, y2);
        if let Some(path) = pb.finish() {
            self.stroke_path(&path, color, 1.0);
        }
    }

    /// Draw a line of annotation text with the built-in dot-matrix font,
    /// anchored at the top-left corner of the first character.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        crate::overlay::draw_dot_matrix_text(self, x, y, text, color);
    }

    /// Set a single pixel; out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        let [r, g, b, a] = color.to_rgba8();
        let idx = y as usize * self.width() as usize + x as usize;
        self.pixmap.pixels_mut()[idx] = tiny_skia::ColorU8::from_rgba(r, g, b, a).premultiply();
    }

    /// Read back a pixel as straight (non-premultiplied) RGBA.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = y as usize * self.width() as usize + x as usize;
        let c = self.pixmap.pixels()[idx].demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Serialize the surface to an encoded image buffer.
    ///
    /// `quality` (0-100) applies to JPEG; other formats ignore it. JPEG
    /// has no alpha channel, so transparent content flattens over black.
    pub fn encode(&self, format: ImageFormat, quality: Option<u8>) -> Result<Vec<u8>> {
        let rgba = self.to_rgba_image();
        let mut buf = Vec::new();
        let mut cursor = Cursor::new(&mut buf);
        match format {
            ImageFormat::Png => {
                image::DynamicImage::ImageRgba8(rgba)
                    .write_to(&mut cursor, image::ImageFormat::Png)?;
            }
            ImageFormat::Jpeg => {
                let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();
                let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(
                    &mut cursor,
                    quality.unwrap_or(90),
                );
                encoder.encode_image(&rgb)?;
            }
            ImageFormat::Webp => {
                let (width, height) = rgba.dimensions();
                image::codecs::webp::WebPEncoder::new_lossless(&mut cursor).encode(
                    rgba.as_raw(),
                    width,
                    height,
                    image::ExtendedColorType::Rgba8,
                )?;
            }
        }
        Ok(buf)
    }

    fn to_rgba_image(&self) -> image::RgbaImage {
        let mut img = image::RgbaImage::new(self.width(), self.height());
        for (dst, src) in img.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        img
    }
}

fn solid_paint(color: Color, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = anti_alias;
    paint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_mime() {
        assert_eq!(ImageFormat::from_mime("image/png"), ImageFormat::Png);
        assert_eq!(ImageFormat::from_mime("image/jpeg"), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_mime("image/webp"), ImageFormat::Webp);
        // Unrecognized subtype or missing separator falls back to PNG.
        assert_eq!(ImageFormat::from_mime("image/tiff"), ImageFormat::Png);
        assert_eq!(ImageFormat::from_mime("png"), ImageFormat::Png);
    }

    #[test]
    fn extension_is_subtype_verbatim() {
        assert_eq!(ImageFormat::Jpeg.extension(), "jpeg");
        assert_eq!(ImageFormat::Png.extension(), "png");
        assert_eq!(ImageFormat::Webp.extension(), "webp");
    }

    #[test]
    fn new_surface_is_transparent() {
        let surface = Surface::new(4, 4);
        assert_eq!(surface.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(3, 3), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(4, 4), None);
    }

    #[test]
    fn zero_dimensions_clamp_to_one() {
        let surface = Surface::new(0, 0);
        assert_eq!(surface.width(), 1);
        assert_eq!(surface.height(), 1);
    }

    #[test]
    fn fill_and_reset() {
        let mut surface = Surface::new(4, 4);
        surface.fill(Color::WHITE);
        assert_eq!(surface.pixel(2, 2), Some([255, 255, 255, 255]));

        // Same-size reset clears in place.
        surface.reset(4, 4);
        assert_eq!(surface.pixel(2, 2), Some([0, 0, 0, 0]));

        // Different size reallocates.
        surface.reset(8, 2);
        assert_eq!(surface.width(), 8);
        assert_eq!(surface.height(), 2);
    }

    #[test]
    fn fill_rect_covers_expected_pixels() {
        let mut surface = Surface::new(8, 8);
        surface.fill_rect(2.0, 2.0, 4.0, 4.0, Color::BLACK);
        assert_eq!(surface.pixel(3, 3), Some([0, 0, 0, 255]));
        assert_eq!(surface.pixel(0, 0), Some([0, 0, 0, 0]));
        // Degenerate rect is a no-op.
        surface.fill_rect(0.0, 0.0, 0.0, 4.0, Color::BLACK);
        assert_eq!(surface.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn set_pixel_ignores_out_of_bounds() {
        let mut surface = Surface::new(2, 2);
        surface.set_pixel(-1, 0, Color::WHITE);
        surface.set_pixel(0, 5, Color::WHITE);
        surface.set_pixel(1, 1, Color::WHITE);
        assert_eq!(surface.pixel(1, 1), Some([255, 255, 255, 255]));
    }

    #[test]
    fn png_round_trip_preserves_size_and_alpha() {
        let mut surface = Surface::new(6, 3);
        surface.set_pixel(1, 1, Color::rgb(1.0, 0.0, 0.0));
        let bytes = surface.encode(ImageFormat::Png, None).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (6, 3));
        assert_eq!(decoded.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn webp_encodes_losslessly() {
        let mut surface = Surface::new(4, 4);
        surface.fill(Color::rgb(0.0, 1.0, 0.0));
        let bytes = surface.encode(ImageFormat::Webp, None).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
    }

    #[test]
    fn jpeg_encodes_with_quality() {
        let mut surface = Surface::new(6, 6);
        surface.fill(Color::WHITE);
        let bytes = surface.encode(ImageFormat::Jpeg, Some(60)).unwrap();
        // JPEG SOI marker.
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
    }
}
