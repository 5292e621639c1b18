//! Render individual font glyphs to fixed-size raster canvases and export
//! them as image files.
//!
//! The pipeline runs in four stages: a parsed [`font::Font`] hands out
//! glyph outlines, the pure [`layout::compute_layout`] fits each outline
//! into a canvas under margin and user-scale constraints, the rasterizer
//! draws it onto a [`surface::Surface`], and the export driver serializes
//! surfaces to encoded images with throttled emission.
//!
//! ```ignore
//! use glyphforge::prelude::*;
//!
//! let data = std::fs::read("font.ttf")?;
//! let font = Font::parse(&data)?;
//!
//! let defaults = RenderSettings::new()
//!     .canvas_size(256, 256)
//!     .margin(20.0)
//!     .user_scale(0.7);
//!
//! let chars: String = font.enumerate_characters().into_iter().collect();
//! let cards = render_all(&font, &chars, &defaults)?;
//!
//! let mut target = DirectoryTarget::new("./glyphs");
//! let count = export_all(&cards, &ExportOptions::default(), &mut target)?;
//! ```

pub mod card;
pub mod color;
pub mod error;
pub mod export;
pub mod font;
pub mod layout;
pub mod overlay;
pub mod render;
pub mod settings;
pub mod surface;

pub mod prelude {
    pub use crate::card::{render_all, update_all_settings, GlyphCard};
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
    pub use crate::export::{
        export_all, export_card, generate_file_name, DirectoryTarget, ExportOptions, ExportTarget,
    };
    pub use crate::font::{Font, GlyphOutline, OutlineProvider};
    pub use crate::layout::{compute_layout, BoundingBox, LayoutResult};
    pub use crate::render::render_glyph;
    pub use crate::settings::RenderSettings;
    pub use crate::surface::{ImageFormat, Surface};
}
