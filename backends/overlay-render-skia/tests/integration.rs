//! Integration tests for the Skia compositor

use std::sync::Arc;

use image::{Rgb, RgbImage};
use overlay_core::{traits::FontRef, types::GlyphId, Color, DrawCommand, ShadowStyle};
use overlay_fontdb::builtin::default_font;
use overlay_render_skia::Compositor;

/// Stub font with no outline data
struct StubFont;

impl FontRef for StubFont {
    fn data(&self) -> &[u8] {
        &[]
    }

    fn units_per_em(&self) -> u16 {
        1000
    }

    fn glyph_id(&self, _ch: char) -> Option<GlyphId> {
        Some(0)
    }

    fn advance_width(&self, _glyph_id: GlyphId) -> f32 {
        500.0
    }
}

fn white(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb([255, 255, 255]))
}

fn command(text: &str, x: i32, y: i32, size: f32, color: Color) -> DrawCommand {
    DrawCommand {
        text: text.to_string(),
        x,
        y,
        font: Arc::new(default_font().unwrap()),
        size,
        color,
    }
}

fn changed_pixels(a: &RgbImage, b: &RgbImage) -> Vec<(u32, u32)> {
    a.enumerate_pixels()
        .filter(|(x, y, px)| b.get_pixel(*x, *y) != *px)
        .map(|(x, y, _)| (x, y))
        .collect()
}

fn shadow(offset: i32, opacity: u8, blur_radius: u32) -> ShadowStyle {
    ShadowStyle {
        enabled: true,
        offset,
        color: Color::black(),
        opacity,
        blur_radius,
    }
}

#[test]
fn test_no_commands_returns_identical_image() {
    let base = RgbImage::from_fn(32, 16, |x, y| Rgb([x as u8, y as u8, 7]));
    let output = Compositor::new()
        .composite(&base, &[], &shadow(3, 200, 4))
        .unwrap();
    assert_eq!(output, base);
}

#[test]
fn test_text_lands_inside_its_line_box() {
    let base = white(200, 100);
    let commands = [command("HELLO", 20, 30, 24.0, Color::black())];
    let output = Compositor::new()
        .composite(&base, &commands, &ShadowStyle::default())
        .unwrap();

    let changed = changed_pixels(&base, &output);
    assert!(!changed.is_empty(), "text should paint something");
    for (x, y) in changed {
        assert!((20..120).contains(&x), "x {} outside the run", x);
        assert!((30..30 + 24 + 8).contains(&y), "y {} outside the line box", y);
    }
}

#[test]
fn test_text_color_is_applied() {
    let base = white(120, 60);
    let commands = [command("I", 10, 10, 40.0, Color::rgb(255, 0, 0))];
    let output = Compositor::new()
        .composite(&base, &commands, &ShadowStyle::default())
        .unwrap();

    // The stem of a capital I is solid at this size
    assert!(output.pixels().any(|px| *px == Rgb([255, 0, 0])));
    // Red over white keeps the red channel saturated, up to blend rounding
    assert!(output.pixels().all(|px| px[0] >= 254));
}

#[test]
fn test_whitespace_only_line_paints_nothing() {
    let base = white(50, 50);
    let commands = [command("   ", 0, 0, 30.0, Color::black())];
    let output = Compositor::new()
        .composite(&base, &commands, &shadow(2, 255, 0))
        .unwrap();
    assert_eq!(output, base);
}

#[test]
fn test_invisible_shadow_matches_disabled_shadow() {
    let base = white(160, 80);
    let commands = [command("Shadow", 10, 10, 30.0, Color::rgb(20, 40, 60))];
    let compositor = Compositor::new();

    let plain = compositor
        .composite(&base, &commands, &ShadowStyle::default())
        .unwrap();
    let invisible = compositor
        .composite(&base, &commands, &shadow(4, 0, 0))
        .unwrap();
    assert_eq!(plain, invisible);
}

#[test]
fn test_shadow_is_offset_and_sits_under_text() {
    let base = white(160, 80);
    // White text on white is invisible; only the shadow can change pixels
    let commands = [command("Shadow", 10, 10, 30.0, Color::white())];
    let compositor = Compositor::new();

    let without = compositor
        .composite(&base, &commands, &ShadowStyle::default())
        .unwrap();
    assert_eq!(without, base);

    let with = compositor
        .composite(&base, &commands, &shadow(5, 255, 0))
        .unwrap();
    let changed = changed_pixels(&base, &with);
    assert!(!changed.is_empty(), "shadow should darken some pixels");

    // The bottom-right-most shadow pixels poke out past the text
    let max_x = changed.iter().map(|(x, _)| *x).max().unwrap();
    let text_only = compositor
        .composite(&base, &[command("Shadow", 10, 10, 30.0, Color::black())], &ShadowStyle::default())
        .unwrap();
    let text_max_x = changed_pixels(&base, &text_only)
        .iter()
        .map(|(x, _)| *x)
        .max()
        .unwrap();
    assert!(max_x >= text_max_x + 4);
}

#[test]
fn test_blur_spreads_the_shadow() {
    let base = white(160, 80);
    let commands = [command("Blur", 20, 20, 30.0, Color::white())];
    let compositor = Compositor::new();

    let sharp = compositor
        .composite(&base, &commands, &shadow(3, 255, 0))
        .unwrap();
    let soft = compositor
        .composite(&base, &commands, &shadow(3, 255, 4))
        .unwrap();

    let sharp_count = changed_pixels(&base, &sharp).len();
    let soft_count = changed_pixels(&base, &soft).len();
    assert!(soft_count > sharp_count);
}

#[test]
fn test_fontless_data_is_an_error() {
    let base = white(20, 20);
    let commands = [DrawCommand {
        text: "x".to_string(),
        x: 0,
        y: 0,
        font: Arc::new(StubFont),
        size: 10.0,
        color: Color::black(),
    }];
    let result = Compositor::new().composite(&base, &commands, &ShadowStyle::default());
    assert!(result.is_err());
}

#[test]
fn test_offscreen_lines_are_clipped() {
    let base = white(40, 40);
    let commands = [
        command("Far", -500, 10, 20.0, Color::black()),
        command("Far", 10, -500, 20.0, Color::black()),
        command("Far", 10, 500, 20.0, Color::black()),
    ];
    let output = Compositor::new()
        .composite(&base, &commands, &shadow(2, 255, 2))
        .unwrap();
    assert_eq!(output, base);
}
