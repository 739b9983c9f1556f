//! The face we fall back to when a requested font can't be used

use overlay_core::error::Result;

use crate::Font;

/// Name reported in logs when the built-in face is substituted
pub const DEFAULT_FONT_NAME: &str = "DejaVuSans.ttf";

/// DejaVu Sans, compiled into the binary
pub static DEFAULT_FONT_DATA: &[u8] = include_bytes!("../../../fonts/DejaVuSans.ttf");

/// Parses a fresh copy of the built-in face
pub fn default_font() -> Result<Font> {
    Font::from_data(DEFAULT_FONT_DATA.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlay_core::FontRef;

    #[test]
    fn test_builtin_font_parses() {
        let font = default_font().unwrap();
        assert_eq!(font.units_per_em(), 2048);
        assert!(font.ascent() > 0.0);
        assert!(font.glyph_count().unwrap_or(0) > 100);
    }

    #[test]
    fn test_builtin_font_measures_latin() {
        let font = default_font().unwrap();
        let space = font.glyph_id(' ').unwrap();
        let m = font.glyph_id('M').unwrap();
        assert!(font.advance_width(space) > 0.0);
        assert!(font.advance_width(m) > font.advance_width(space));
    }
}
