//! Glyph rasterization: applying a layout to a surface.

use crate::font::GlyphOutline;
use crate::layout::LayoutResult;
use crate::overlay;
use crate::settings::RenderSettings;
use crate::surface::Surface;

/// Draw one glyph onto `surface` according to `layout` and `settings`.
///
/// The surface is reset to the settings' canvas size first. An opaque
/// background is filled unless `transparent_background` is set. A
/// `font_scale` of zero (margin swallowed the canvas) or an ink-less
/// outline leaves the background only; both are defined results, not
/// errors. The diagnostic overlay, when enabled, is layered strictly
/// after the glyph and never affects its geometry.
///
/// All side effects are confined to `surface`.
pub fn render_glyph(
    outline: &GlyphOutline,
    layout: &LayoutResult,
    settings: &RenderSettings,
    surface: &mut Surface,
) {
    surface.reset(settings.canvas_width, settings.canvas_height);

    if !settings.transparent_background {
        surface.fill(settings.background_color);
    }

    if layout.font_scale > 0.0 {
        if let Some(path) = outline.place(layout.origin_x, layout.origin_y, layout.font_scale) {
            surface.fill_path(&path, settings.stroke_color);
        }
    }

    if settings.debug_overlay {
        overlay::draw_debug_overlay(surface, layout, settings);
    }
}
