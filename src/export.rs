//! Batch export: encode rendered surfaces and emit them as image files.
//!
//! Exports run strictly one after another. Successive emits are separated
//! by a fixed delay so rapid file-save triggers do not overwhelm the host
//! (a pacing concession, not retry logic); a single export has no delay.

use std::path::PathBuf;
use std::time::Duration;

use crate::card::GlyphCard;
use crate::error::{Error, Result};
use crate::surface::ImageFormat;

/// Default delay between successive batch exports.
pub const DEFAULT_EXPORT_DELAY: Duration = Duration::from_millis(100);

/// Receiver for exported files: the host's save-as-file mechanism.
pub trait ExportTarget {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> Result<()>;
}

/// Export target writing files into a directory, created on first use.
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExportTarget for DirectoryTarget {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.dir.join(file_name), bytes)?;
        Ok(())
    }
}

/// Format, quality, and pacing for a batch export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub format: ImageFormat,
    /// Encoder quality (0-100) for formats that support it.
    pub quality: Option<u8>,
    /// Delay between successive exports.
    pub delay: Duration,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ImageFormat::Png,
            quality: None,
            delay: DEFAULT_EXPORT_DELAY,
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// File name for an exported glyph: `glyph_U+<HEX>.<ext>`.
///
/// The codepoint is uppercase hex, zero-padded to at least four digits;
/// the extension is the format's subtype. Every character of the result
/// lies in a filesystem-safe alphabet by construction.
pub fn generate_file_name(codepoint: u32, format: ImageFormat) -> String {
    format!("glyph_U+{codepoint:04X}.{}", format.extension())
}

/// Encode and emit a single card, with no delay.
pub fn export_card<T: ExportTarget>(
    card: &GlyphCard,
    options: &ExportOptions,
    target: &mut T,
) -> Result<()> {
    let bytes = card.surface().encode(options.format, options.quality)?;
    let file_name = generate_file_name(card.codepoint(), options.format);
    target.save(&file_name, &bytes)
}

/// Export every card in order, returning the number exported.
///
/// Each export completes before the next one's delay starts; no two
/// exports overlap. An empty card collection is an error, not a silent
/// zero: a caller with nothing rendered should hear about it.
pub fn export_all<T: ExportTarget>(
    cards: &[GlyphCard],
    options: &ExportOptions,
    target: &mut T,
) -> Result<usize> {
    if cards.is_empty() {
        return Err(Error::NothingToExport);
    }

    for (index, card) in cards.iter().enumerate() {
        if index > 0 {
            std::thread::sleep(options.delay);
        }
        export_card(card, options, target)?;
    }

    log::info!("Exported {} glyphs", cards.len());
    Ok(cards.len())
}
