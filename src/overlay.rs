//! Diagnostic overlay: layout guides and numeric annotations.
//!
//! Drawn strictly after the glyph, in fixed colors, from the same
//! [`LayoutResult`] the glyph was placed with, so enabling or disabling
//! the overlay can never perturb glyph geometry. Annotations use a built-in
//! 5×7 dot-matrix font so diagnostics never depend on the font being
//! inspected.

use crate::color::Color;
use crate::layout::LayoutResult;
use crate::settings::RenderSettings;
use crate::surface::Surface;

/// Margin-inset rectangle (the available area).
const MARGIN_RECT_COLOR: Color = Color::from_hex(0x4CAF50);
/// Scaled glyph bounding box.
const BBOX_COLOR: Color = Color::from_hex(0xF44336);
/// Baseline (the glyph origin's horizontal).
const BASELINE_COLOR: Color = Color::from_hex(0x2196F3);
/// Vertical centerline through the glyph origin.
const CENTERLINE_COLOR: Color = Color::from_hex(0xFF9800);
/// Numeric annotations.
const ANNOTATION_COLOR: Color = Color::from_hex(0x616161);

/// Draw layout guides and annotations over an already-rendered glyph.
pub fn draw_debug_overlay(surface: &mut Surface, layout: &LayoutResult, settings: &RenderSettings) {
    let width = settings.canvas_width as f32;
    let height = settings.canvas_height as f32;
    let margin = settings.margin;
    let available_width = width - 2.0 * margin;
    let available_height = height - 2.0 * margin;

    if available_width > 0.0 && available_height > 0.0 {
        surface.stroke_rect(
            margin,
            margin,
            available_width,
            available_height,
            MARGIN_RECT_COLOR,
        );

        // The scaled bounding box sits centered in the available area;
        // its top-left follows from the centering the layout guarantees.
        let bbox_x = margin + (available_width - layout.scaled_width) / 2.0;
        let bbox_y = margin + (available_height - layout.scaled_height) / 2.0;
        if layout.scaled_width > 0.0 && layout.scaled_height > 0.0 {
            surface.stroke_rect(
                bbox_x,
                bbox_y,
                layout.scaled_width,
                layout.scaled_height,
                BBOX_COLOR,
            );
        }
    }

    // Baseline and the vertical through the glyph origin, full-bleed.
    surface.draw_line(0.0, layout.origin_y, width, layout.origin_y, BASELINE_COLOR);
    surface.draw_line(
        layout.origin_x,
        0.0,
        layout.origin_x,
        height,
        CENTERLINE_COLOR,
    );

    let origin_line = format!("origin {:.1},{:.1}", layout.origin_x, layout.origin_y);
    let scale_line = format!("scale {:.4}", layout.font_scale);
    let bbox_line = format!(
        "bbox {:.1}x{:.1}",
        layout.scaled_width, layout.scaled_height
    );
    let line_height = DOT_ROWS + 2;
    surface.draw_text(2, 2, &origin_line, ANNOTATION_COLOR);
    surface.draw_text(2, 2 + line_height, &scale_line, ANNOTATION_COLOR);
    surface.draw_text(2, 2 + 2 * line_height, &bbox_line, ANNOTATION_COLOR);
}

/// Glyph cell advance of the dot-matrix font (5 columns + 1 gap).
const DOT_ADVANCE: i32 = 6;
/// Rows per dot-matrix glyph.
const DOT_ROWS: i32 = 7;

/// Render `text` in the 5×7 dot-matrix font, one pixel per dot.
///
/// Characters outside the font's small repertoire advance without
/// drawing. Clipping is per pixel, so partially off-surface text is safe.
pub(crate) fn draw_dot_matrix_text(
    surface: &mut Surface,
    x: i32,
    y: i32,
    text: &str,
    color: Color,
) {
    let mut pen_x = x;
    for c in text.chars() {
        if let Some(rows) = glyph_rows(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..5 {
                    if bits & (0b10000 >> col) != 0 {
                        surface.set_pixel(pen_x + col, y + row as i32, color);
                    }
                }
            }
        }
        pen_x += DOT_ADVANCE;
    }
}

/// 5×7 row patterns for the characters the overlay emits: digits,
/// punctuation, and the lowercase letters of the annotation labels.
/// Bit 4 is the leftmost column.
fn glyph_rows(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        ' ' => [0b00000; 7],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00110, 0b01100],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'a' => [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
        'b' => [0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110],
        'c' => [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110],
        'e' => [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
        'g' => [0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
        'i' => [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
        'l' => [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'n' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'o' => [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'r' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
        's' => [0b00000, 0b00000, 0b01111, 0b10000, 0b01110, 0b00001, 0b11110],
        'x' => [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001],
        _ => return None,
    };
    Some(rows)
}
