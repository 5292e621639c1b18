//! Per-glyph render settings.
//!
//! One [`RenderSettings`] value exists per rendered glyph. Cards receive a
//! value-copy of the global defaults at creation time and are updated only
//! by explicit assignment, never through a shared reference. A change to
//! the defaults is invisible to existing cards until it is copied into
//! them (see [`crate::card::update_all_settings`]).
//!
//! ```ignore
//! RenderSettings::new()
//!     .canvas_size(512, 512)
//!     .margin(24.0)
//!     .user_scale(0.8)
//!     .stroke_color(Color::from_hex(0x202020))
//!     .transparent_background(true)
//! ```

use crate::color::Color;

/// Canvas, layout, and paint parameters for rendering one glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Canvas width in pixels (at least 1).
    pub canvas_width: u32,
    /// Canvas height in pixels (at least 1).
    pub canvas_height: u32,
    /// Inset from every canvas edge, in pixels. Must be non-negative; a
    /// margin that swallows the canvas degrades to an empty render.
    pub margin: f32,
    /// Extra scale applied after fitting (1.0 = fill the available area).
    pub user_scale: f32,
    /// Fill color for the glyph outline.
    pub stroke_color: Color,
    /// Background fill color when the background is opaque.
    pub background_color: Color,
    /// Leave the background fully transparent instead of filling it.
    pub transparent_background: bool,
    /// Draw the diagnostic overlay after the glyph.
    pub debug_overlay: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            canvas_width: 256,
            canvas_height: 256,
            margin: 16.0,
            user_scale: 1.0,
            stroke_color: Color::BLACK,
            background_color: Color::WHITE,
            transparent_background: false,
            debug_overlay: false,
        }
    }
}

impl RenderSettings {
    /// Create settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas width in pixels (clamped to at least 1).
    pub fn canvas_width(mut self, width: u32) -> Self {
        self.canvas_width = width.max(1);
        self
    }

    /// Set the canvas height in pixels (clamped to at least 1).
    pub fn canvas_height(mut self, height: u32) -> Self {
        self.canvas_height = height.max(1);
        self
    }

    /// Set both canvas dimensions at once.
    pub fn canvas_size(self, width: u32, height: u32) -> Self {
        self.canvas_width(width).canvas_height(height)
    }

    /// Set the margin in pixels.
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the user scale factor.
    pub fn user_scale(mut self, scale: f32) -> Self {
        self.user_scale = scale;
        self
    }

    /// Set the glyph fill color.
    pub fn stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    /// Set the background fill color.
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Render on a fully transparent background.
    pub fn transparent_background(mut self, transparent: bool) -> Self {
        self.transparent_background = transparent;
        self
    }

    /// Enable the diagnostic overlay.
    pub fn debug_overlay(mut self, enabled: bool) -> Self {
        self.debug_overlay = enabled;
        self
    }
}
