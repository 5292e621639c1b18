//! End-to-end pipeline tests: outline provider → layout → rasterize →
//! encode → export, using a stub provider in place of a parsed font.

use std::sync::Once;
use std::time::{Duration, Instant};

use glyphforge::prelude::*;
use tiny_skia::PathBuilder;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Maps digits to a tall bar with a descender and letters to a square on
/// the baseline; everything else is unmapped.
struct StubProvider;

impl OutlineProvider for StubProvider {
    fn outline_for(&self, character: char) -> Option<GlyphOutline> {
        let mut pb = PathBuilder::new();
        if character.is_ascii_digit() {
            // 200 units below the baseline, 1400 above, 600 wide.
            pb.move_to(0.0, -1400.0);
            pb.line_to(600.0, -1400.0);
            pb.line_to(600.0, 200.0);
            pb.line_to(0.0, 200.0);
            pb.close();
        } else if character.is_ascii_alphabetic() {
            pb.move_to(0.0, -1000.0);
            pb.line_to(1000.0, -1000.0);
            pb.line_to(1000.0, 0.0);
            pb.line_to(0.0, 0.0);
            pb.close();
        } else {
            return None;
        }
        Some(GlyphOutline::from_path(pb.finish().unwrap()))
    }
}

struct MemoryTarget {
    files: Vec<(String, Vec<u8>, Instant)>,
}

impl MemoryTarget {
    fn new() -> Self {
        Self { files: Vec::new() }
    }
}

impl ExportTarget for MemoryTarget {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> Result<()> {
        self.files
            .push((file_name.to_string(), bytes.to_vec(), Instant::now()));
        Ok(())
    }
}

#[test]
fn full_pass_renders_skips_and_exports() {
    init_logging();

    let defaults = RenderSettings::new().canvas_size(64, 64).margin(6.0);
    // '!' is unmapped and silently skipped.
    let cards = render_all(&StubProvider, "A1!b", &defaults).unwrap();
    assert_eq!(cards.len(), 3);

    let options = ExportOptions::new().delay(Duration::from_millis(15));
    let mut target = MemoryTarget::new();
    let count = export_all(&cards, &options, &mut target).unwrap();

    assert_eq!(count, 3);
    let names: Vec<&str> = target.files.iter().map(|f| f.0.as_str()).collect();
    assert_eq!(
        names,
        ["glyph_U+0041.png", "glyph_U+0031.png", "glyph_U+0062.png"]
    );

    // Emits are strictly ordered and spaced by at least the delay.
    for pair in target.files.windows(2) {
        assert!(pair[1].2.duration_since(pair[0].2) >= options.delay);
    }
}

#[test]
fn exported_png_decodes_to_canvas_size_with_centered_ink() {
    init_logging();

    let defaults = RenderSettings::new()
        .canvas_size(96, 48)
        .margin(4.0)
        .stroke_color(Color::from_hex(0x102030));
    let cards = render_all(&StubProvider, "X", &defaults).unwrap();

    let mut target = MemoryTarget::new();
    export_all(&cards, &ExportOptions::default(), &mut target).unwrap();

    let decoded = image::load_from_memory(&target.files[0].1)
        .unwrap()
        .to_rgba8();
    assert_eq!(decoded.dimensions(), (96, 48));
    // Square glyph fit into a wide canvas: ink at the canvas center,
    // background at the left and right flanks.
    assert_eq!(decoded.get_pixel(48, 24).0, [0x10, 0x20, 0x30, 255]);
    assert_eq!(decoded.get_pixel(4, 24).0, [255, 255, 255, 255]);
    assert_eq!(decoded.get_pixel(91, 24).0, [255, 255, 255, 255]);
}

#[test]
fn descender_glyph_ink_spans_the_inset_height() {
    init_logging();

    // Tall digit bar (1600 units high, 600 wide) in a square canvas:
    // height-limited, so ink runs from the top inset to the bottom inset.
    let defaults = RenderSettings::new().canvas_size(64, 64).margin(8.0);
    let cards = render_all(&StubProvider, "7", &defaults).unwrap();
    let surface = cards[0].surface();

    assert_eq!(surface.pixel(32, 10), Some([0, 0, 0, 255]));
    assert_eq!(surface.pixel(32, 54), Some([0, 0, 0, 255]));
    // Outside the inset band the margin stays background.
    assert_eq!(surface.pixel(32, 3), Some([255, 255, 255, 255]));
    assert_eq!(surface.pixel(32, 61), Some([255, 255, 255, 255]));
    // The bar is width-centered: 600/1600 of 48px ≈ 18px around x=32.
    assert_eq!(surface.pixel(32, 32), Some([0, 0, 0, 255]));
    assert_eq!(surface.pixel(12, 32), Some([255, 255, 255, 255]));
    assert_eq!(surface.pixel(52, 32), Some([255, 255, 255, 255]));
}

#[test]
fn global_defaults_reach_cards_only_by_explicit_copy() {
    init_logging();

    let defaults = RenderSettings::new().canvas_size(32, 32);
    let mut cards = render_all(&StubProvider, "AB", &defaults).unwrap();

    let updated = defaults
        .clone()
        .canvas_size(40, 40)
        .transparent_background(true);
    // Not yet copied: cards still render the old settings.
    assert_eq!(cards[0].surface().width(), 32);
    assert_eq!(cards[0].surface().pixel(0, 0), Some([255, 255, 255, 255]));

    update_all_settings(&mut cards, &updated);
    for card in &cards {
        assert_eq!(card.surface().width(), 40);
        assert_eq!(card.surface().pixel(0, 0), Some([0, 0, 0, 0]));
    }
}

#[test]
fn debug_overlay_never_perturbs_glyph_geometry() {
    init_logging();

    let plain = RenderSettings::new().canvas_size(64, 64).margin(6.0);
    let overlaid = plain.clone().debug_overlay(true);

    let base = render_all(&StubProvider, "Q", &plain).unwrap();
    let decorated = render_all(&StubProvider, "Q", &overlaid).unwrap();

    // Sample inside the glyph ink, away from guide lines: identical.
    let probe = (30u32, 30u32);
    assert_eq!(
        base[0].surface().pixel(probe.0, probe.1),
        decorated[0].surface().pixel(probe.0, probe.1)
    );
}
