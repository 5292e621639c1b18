//! Error types for font loading, rendering, and export.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to parse font: {0}")]
    Parse(#[from] ttf_parser::FaceParsingError),
    #[error("No characters to render")]
    EmptyCharacterSet,
    #[error("None of the requested characters map to a glyph")]
    NoRenderableGlyphs,
    #[error("No rendered glyphs to export")]
    NothingToExport,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
