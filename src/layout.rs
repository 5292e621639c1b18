//! Glyph layout: fit an outline's bounding box into a fixed-size canvas.
//!
//! [`compute_layout`] is a pure function from a bounding box and canvas
//! parameters to a scale factor and draw origin. It performs uniform
//! (aspect-preserving) scaling and centers the scaled box inside the
//! margin-inset area on both axes. All coordinates are in raster
//! orientation (Y down); the conversion from the font's Y-up space happens
//! once, during outline extraction, never here.

/// Axis-aligned bounding box with `x1 <= x2` and `y1 <= y2`.
///
/// A degenerate glyph (e.g. space) may have zero width or height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BoundingBox {
    pub const ZERO: BoundingBox = BoundingBox {
        x1: 0.0,
        y1: 0.0,
        x2: 0.0,
        y2: 0.0,
    };

    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }
}

/// Scale and draw origin for placing a glyph outline on a canvas.
///
/// Derived from its inputs on every render; never cached across setting
/// changes. Applying `x' = origin_x + x * font_scale` (same for Y) to the
/// outline's coordinates places its bounding box centered within the
/// margin-inset rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutResult {
    /// Uniform scale from outline units to canvas pixels. Zero when the
    /// margin leaves no room to draw.
    pub font_scale: f32,
    /// X of the outline's coordinate origin on the canvas.
    pub origin_x: f32,
    /// Y of the outline's coordinate origin (the baseline) on the canvas.
    pub origin_y: f32,
    /// Bounding-box width after scaling.
    pub scaled_width: f32,
    /// Bounding-box height after scaling.
    pub scaled_height: f32,
}

/// Compute the scale and origin that fit `bbox` into the canvas.
///
/// The available area is the canvas inset by `margin` on every side. The
/// glyph is scaled uniformly so the bounding box fits the available area,
/// then multiplied by `user_scale`, and centered on both axes. The origin
/// compensates for the box's own offset from the outline's coordinate
/// origin (`bbox.x1 / y1` need not be zero, and are not for glyphs with
/// side bearings or parts above the baseline).
///
/// Degenerate cases are defined results, not errors:
/// - margin swallows the canvas (`available <= 0`) → `font_scale = 0`;
/// - a zero-size bbox axis leaves that axis unconstrained;
/// - both axes zero → `font_scale = user_scale`.
///
/// Callers must pass non-negative `margin` and `user_scale`.
pub fn compute_layout(
    bbox: &BoundingBox,
    canvas_width: u32,
    canvas_height: u32,
    margin: f32,
    user_scale: f32,
) -> LayoutResult {
    let available_width = canvas_width as f32 - 2.0 * margin;
    let available_height = canvas_height as f32 - 2.0 * margin;
    let glyph_width = bbox.width();
    let glyph_height = bbox.height();

    let font_scale = if available_width <= 0.0 || available_height <= 0.0 {
        0.0
    } else if glyph_width == 0.0 && glyph_height == 0.0 {
        user_scale
    } else {
        // A zero-size axis is unconstrained; the other axis alone decides.
        let fit_x = if glyph_width == 0.0 {
            f32::INFINITY
        } else {
            available_width / glyph_width
        };
        let fit_y = if glyph_height == 0.0 {
            f32::INFINITY
        } else {
            available_height / glyph_height
        };
        fit_x.min(fit_y) * user_scale
    };

    let scaled_width = glyph_width * font_scale;
    let scaled_height = glyph_height * font_scale;

    LayoutResult {
        font_scale,
        origin_x: margin + (available_width - scaled_width) / 2.0 - bbox.x1 * font_scale,
        origin_y: margin + (available_height - scaled_height) / 2.0 - bbox.y1 * font_scale,
        scaled_width,
        scaled_height,
    }
}
