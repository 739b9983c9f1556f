//! The font contract shared by layout and rasterization
//!
//! Layout only needs advances and the ascent. The rasterizer additionally
//! reads the raw bytes to pull outlines, so both live behind one trait.

use crate::types::GlyphId;

/// Your window into a loaded font face
///
/// All metrics are in font units. Callers scale by `size / units_per_em`.
///
/// ```ignore
/// struct MyFont {
///     data: Vec<u8>,
/// }
///
/// impl FontRef for MyFont {
///     fn data(&self) -> &[u8] {
///         &self.data
///     }
///
///     fn units_per_em(&self) -> u16 {
///         2048
///     }
///
///     fn glyph_id(&self, ch: char) -> Option<GlyphId> {
///         Some(42)
///     }
///
///     fn advance_width(&self, glyph_id: GlyphId) -> f32 {
///         1234.0
///     }
/// }
/// ```
pub trait FontRef: Send + Sync {
    /// Raw font bytes as they live in the file
    fn data(&self) -> &[u8];

    /// Which face inside a collection these bytes describe
    fn face_index(&self) -> u32 {
        0
    }

    /// The font's internal coordinate system scale
    fn units_per_em(&self) -> u16;

    /// Find the glyph that represents this character
    ///
    /// Returns None when the font doesn't contain this character.
    fn glyph_id(&self, ch: char) -> Option<GlyphId>;

    /// Horizontal advance of this glyph in font units
    fn advance_width(&self, glyph_id: GlyphId) -> f32;

    /// Distance from the top of the line box to the baseline, in font units
    fn ascent(&self) -> f32 {
        f32::from(self.units_per_em()) * 0.8
    }

    /// Pixels per font unit at the given pixel size
    fn scale(&self, size: f32) -> f32 {
        let upem = self.units_per_em().max(1);
        size / f32::from(upem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SquareFont;

    impl FontRef for SquareFont {
        fn data(&self) -> &[u8] {
            &[]
        }

        fn units_per_em(&self) -> u16 {
            1000
        }

        fn glyph_id(&self, _ch: char) -> Option<GlyphId> {
            Some(1)
        }

        fn advance_width(&self, _glyph_id: GlyphId) -> f32 {
            1000.0
        }
    }

    #[test]
    fn test_default_ascent_is_eighty_percent_of_em() {
        assert_eq!(SquareFont.ascent(), 800.0);
    }

    #[test]
    fn test_scale_maps_em_to_pixel_size() {
        assert_eq!(SquareFont.scale(20.0), 0.02);
        assert_eq!(SquareFont.face_index(), 0);
    }
}
