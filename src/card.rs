//! Glyph cards: one rendered glyph with its own settings and surface.
//!
//! Each card owns an independent value-copy of the render settings and its
//! own surface; nothing is shared between cards, so changing one card (or
//! the global defaults) cannot affect another. The card collection is
//! rebuilt wholesale by [`render_all`] on every pass; there is no
//! incremental diffing.

use crate::error::{Error, Result};
use crate::font::{GlyphOutline, OutlineProvider};
use crate::layout::compute_layout;
use crate::render::render_glyph;
use crate::settings::RenderSettings;
use crate::surface::Surface;

/// A single rendered glyph: character identity, outline, settings copy,
/// and the surface holding its pixels.
pub struct GlyphCard {
    character: char,
    codepoint: u32,
    outline: GlyphOutline,
    settings: RenderSettings,
    surface: Surface,
}

impl GlyphCard {
    /// Create a card and render it immediately.
    ///
    /// `settings` is moved in as this card's private copy.
    pub fn new(character: char, outline: GlyphOutline, settings: RenderSettings) -> Self {
        let surface = Surface::new(settings.canvas_width, settings.canvas_height);
        let mut card = Self {
            character,
            codepoint: character as u32,
            outline,
            settings,
            surface,
        };
        card.rerender();
        card
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn codepoint(&self) -> u32 {
        self.codepoint
    }

    pub fn outline(&self) -> &GlyphOutline {
        &self.outline
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Replace this card's settings with a new value-copy and re-render.
    pub fn set_settings(&mut self, settings: RenderSettings) {
        self.settings = settings;
        self.rerender();
    }

    /// Re-render from the current settings. The layout is recomputed from
    /// scratch each time, never cached.
    pub fn rerender(&mut self) {
        let layout = compute_layout(
            &self.outline.bounding_box(),
            self.settings.canvas_width,
            self.settings.canvas_height,
            self.settings.margin,
            self.settings.user_scale,
        );
        render_glyph(&self.outline, &layout, &self.settings, &mut self.surface);
    }
}

/// Render a card for every character in `characters`.
///
/// Characters without a mapped outline are skipped (logged at debug
/// level), not fatal. An empty input set is an error, and so is an input
/// set where every character was skipped. Each card gets its own copy of
/// `defaults`.
pub fn render_all<P: OutlineProvider>(
    provider: &P,
    characters: &str,
    defaults: &RenderSettings,
) -> Result<Vec<GlyphCard>> {
    if characters.is_empty() {
        return Err(Error::EmptyCharacterSet);
    }

    let mut cards = Vec::new();
    for character in characters.chars() {
        match provider.outline_for(character) {
            Some(outline) => {
                cards.push(GlyphCard::new(character, outline, defaults.clone()));
            }
            None => {
                log::debug!(
                    "Skipping U+{:04X} {:?}: no glyph mapped",
                    character as u32,
                    character
                );
            }
        }
    }

    if cards.is_empty() {
        return Err(Error::NoRenderableGlyphs);
    }
    log::info!("Rendered {} glyph previews", cards.len());
    Ok(cards)
}

/// Copy `defaults` into every card and re-render each.
///
/// This is the only way a global-defaults change reaches existing cards;
/// cards never observe the defaults through a shared reference.
pub fn update_all_settings(cards: &mut [GlyphCard], defaults: &RenderSettings) {
    for card in cards.iter_mut() {
        card.set_settings(defaults.clone());
    }
}
