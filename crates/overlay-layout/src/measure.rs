//! Pixel widths of text runs
//!
//! Advances are summed glyph by glyph without kerning, so the width of a
//! joined line is exactly the widths of its words plus its spaces.

use overlay_core::traits::FontRef;

/// Rendered width of `text` at `size` pixels
///
/// Characters the font lacks use the advance of glyph 0 (.notdef).
pub fn text_width(font: &dyn FontRef, text: &str, size: f32) -> f32 {
    let scale = font.scale(size);
    text.chars()
        .map(|ch| font.advance_width(font.glyph_id(ch).unwrap_or(0)) * scale)
        .sum()
}

/// Width of one space at `size` pixels
pub fn space_width(font: &dyn FontRef, size: f32) -> f32 {
    text_width(font, " ", size)
}
