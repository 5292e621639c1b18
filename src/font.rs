//! Font parsing and glyph outline extraction.
//!
//! [`Font`] wraps a `ttf_parser::Face` and hands out [`GlyphOutline`]s:
//! immutable vector paths in raster orientation together with their
//! bounding boxes. Fonts define outlines with Y pointing up from the
//! baseline; raster canvases have Y pointing down from the top-left. The
//! flip happens exactly once, here, while the outline is extracted; every
//! consumer downstream (layout, rasterizer) works in plain raster
//! coordinates with no axis special-casing.
//!
//! [`OutlineProvider`] is the seam consumers depend on, so any outline
//! source satisfying the contract can stand in for a parsed font.

use tiny_skia::{Path, PathBuilder, Transform};
use ttf_parser::{Face, OutlineBuilder};

use crate::error::Result;
use crate::layout::BoundingBox;

/// Source of glyph outlines, keyed by character.
///
/// Returns `None` when the character has no usable outline (unmapped, or
/// mapped to the missing-glyph placeholder). Batch rendering skips such
/// characters instead of failing.
pub trait OutlineProvider {
    fn outline_for(&self, character: char) -> Option<GlyphOutline>;
}

/// An immutable glyph outline in raster orientation.
///
/// The path's coordinate origin is the glyph origin (baseline at `y = 0`,
/// ink above the baseline at negative Y). Units are the font's design
/// units; scaling to pixels is the layout engine's job. A glyph with no
/// ink (e.g. space) has no path and a zero-size bounding box.
#[derive(Debug, Clone)]
pub struct GlyphOutline {
    path: Option<Path>,
    bbox: BoundingBox,
}

impl GlyphOutline {
    /// Outline with no ink. Lays out with `font_scale = user_scale` and
    /// renders as background only.
    pub fn empty() -> Self {
        Self {
            path: None,
            bbox: BoundingBox::ZERO,
        }
    }

    /// Build an outline from an already-oriented path. The bounding box is
    /// taken from the path's own bounds.
    pub fn from_path(path: Path) -> Self {
        let b = path.bounds();
        let bbox = BoundingBox::new(b.left(), b.top(), b.right(), b.bottom());
        Self {
            path: Some(path),
            bbox,
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    pub fn has_ink(&self) -> bool {
        self.path.is_some()
    }

    /// The outline placed on a canvas: scaled uniformly by `scale` and
    /// translated so the glyph origin lands at `(x, y)`.
    ///
    /// Returns `None` for ink-less glyphs or when the transform collapses
    /// the path below tiny-skia's validity threshold.
    pub fn place(&self, x: f32, y: f32, scale: f32) -> Option<Path> {
        self.path
            .as_ref()?
            .clone()
            .transform(Transform::from_row(scale, 0.0, 0.0, scale, x, y))
    }
}

/// A parsed font, borrowed from the caller's font bytes.
///
/// Parsing completes fully (this constructor returns) before any character
/// enumeration or rendering can begin.
pub struct Font<'a> {
    face: Face<'a>,
}

impl<'a> Font<'a> {
    /// Parse the first face of a font binary.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        let face = Face::parse(data, 0)?;
        Ok(Self { face })
    }

    /// All characters the font maps to a glyph, excluding control
    /// characters below codepoint 32. Sorted and deduplicated.
    pub fn enumerate_characters(&self) -> Vec<char> {
        let mut chars = Vec::new();
        if let Some(cmap) = self.face.tables().cmap {
            for subtable in cmap.subtables {
                if !subtable.is_unicode() {
                    continue;
                }
                subtable.codepoints(|cp| {
                    if cp >= 32 {
                        if let Some(c) = char::from_u32(cp) {
                            chars.push(c);
                        }
                    }
                });
            }
        }
        chars.sort_unstable();
        chars.dedup();
        chars
    }
}

impl OutlineProvider for Font<'_> {
    fn outline_for(&self, character: char) -> Option<GlyphOutline> {
        let glyph_id = self.face.glyph_index(character)?;
        if glyph_id.0 == 0 {
            // Mapped to .notdef; treat as missing.
            return None;
        }

        let mut sink = RasterPathSink::new();
        match self.face.outline_glyph(glyph_id, &mut sink) {
            Some(bounds) => {
                let path = sink.finish();
                // Tight bounds from the font, flipped into raster
                // orientation: the font's top edge becomes the smallest Y.
                let bbox = BoundingBox::new(
                    bounds.x_min as f32,
                    -(bounds.y_max as f32),
                    bounds.x_max as f32,
                    -(bounds.y_min as f32),
                );
                Some(GlyphOutline { path, bbox })
            }
            // Mapped glyph without contours (e.g. space).
            None => Some(GlyphOutline::empty()),
        }
    }
}

/// Receives ttf-parser outline callbacks and builds a tiny-skia path with
/// the Y axis flipped into raster orientation.
struct RasterPathSink {
    builder: PathBuilder,
}

impl RasterPathSink {
    fn new() -> Self {
        Self {
            builder: PathBuilder::new(),
        }
    }

    fn finish(self) -> Option<Path> {
        self.builder.finish()
    }
}

impl OutlineBuilder for RasterPathSink {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x, -y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x, -y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(x1, -y1, x, -y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(x1, -y1, x2, -y2, x, -y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
