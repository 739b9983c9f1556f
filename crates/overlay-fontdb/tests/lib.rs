// this_file: crates/overlay-fontdb/tests/lib.rs

use std::path::PathBuf;
use std::sync::Arc;

use overlay_core::{
    error::{FontLoadError, OverlayError},
    traits::FontRef,
};
use overlay_fontdb::{Font, FontResolver};
use read_fonts::{FontRef as ReadFontRef, TableProvider};

fn repo_fonts_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fonts")
}

#[test]
fn test_metrics_when_loading_real_font_then_match_read_fonts_tables() {
    let font_path = repo_fonts_dir().join("DejaVuSans-Bold.ttf");
    let font = Arc::new(Font::from_file(&font_path).expect("load test font"));
    let font_ref: Arc<dyn FontRef> = font;

    let data = std::fs::read(&font_path).expect("read test font bytes");
    let read_font = ReadFontRef::from_index(&data, 0).expect("parse test font");
    let expected_units_per_em = read_font.head().map(|head| head.units_per_em()).unwrap();
    let expected_ascent = read_font.hhea().map(|hhea| hhea.ascender().to_i16()).unwrap();

    assert_eq!(font_ref.units_per_em(), expected_units_per_em);
    assert_eq!(font_ref.ascent(), f32::from(expected_ascent));
}

#[test]
fn test_bundled_font_resolves_without_degrading() {
    let mut resolver = FontResolver::new(repo_fonts_dir());
    let resolution = resolver.resolve("DejaVuSans-Bold.ttf").expect("resolve bundled font");
    assert!(!resolution.degraded);

    // Bold glyphs are wider than the regular built-in ones
    let builtin = resolver.builtin().expect("builtin font");
    let m_bold = resolution.font.glyph_id('M').unwrap();
    let m_regular = builtin.glyph_id('M').unwrap();
    assert!(resolution.font.advance_width(m_bold) > builtin.advance_width(m_regular));
}

#[test]
fn test_unknown_font_falls_back_to_builtin() {
    let mut resolver = FontResolver::new(repo_fonts_dir());
    let resolution = resolver.resolve("SharpGroteskCyrBold-25.otf").unwrap();
    assert!(resolution.degraded);

    let builtin = resolver.builtin().unwrap();
    assert!(Arc::ptr_eq(&resolution.font, &builtin));
}

#[test]
fn test_corrupt_font_file_falls_back_to_builtin() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Broken.ttf"), b"not a font at all").unwrap();

    let mut resolver = FontResolver::new(dir.path());
    assert!(resolver.resolve("Broken.ttf").unwrap().degraded);
}

#[test]
fn test_available_fonts_lists_only_font_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.otf"), b"").unwrap();
    std::fs::write(dir.path().join("a.ttf"), b"").unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"").unwrap();
    std::fs::create_dir(dir.path().join("nested.ttf")).unwrap();

    let resolver = FontResolver::new(dir.path());
    assert_eq!(resolver.available_fonts(), vec!["a.ttf", "b.otf"]);
}

#[test]
fn test_repo_fonts_directory_is_listed() {
    let resolver = FontResolver::new(repo_fonts_dir());
    let fonts = resolver.available_fonts();
    assert!(fonts.contains(&"DejaVuSans.ttf".to_string()));
    assert!(fonts.contains(&"DejaVuSans-Bold.ttf".to_string()));
}

#[test]
fn test_loading_by_path_distinguishes_missing_from_unreadable() {
    let dir = tempfile::tempdir().unwrap();

    let missing = Font::from_file(dir.path().join("absent.ttf"));
    assert!(matches!(
        missing,
        Err(OverlayError::FontLoad(FontLoadError::FileNotFound(_)))
    ));

    // A directory exists but cannot be read as a file
    assert!(matches!(Font::from_file(dir.path()), Err(OverlayError::Io(_))));
}
