//! Where fonts come from: loading, lookup and fallback
//!
//! Block specs name fonts by file name. [`FontResolver`] turns those names
//! into loaded faces by looking in one bundled fonts directory. A name that
//! doesn't resolve is not fatal: the built-in face steps in and the
//! resolution is marked as degraded so callers can tell.
//!
//! ## Memory Management
//!
//! Fonts store their raw data and create a read-fonts `FontRef` on demand
//! for parsing. A resolver caches faces by name, so a file shared by several
//! blocks is read once per render call.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use read_fonts::{types::GlyphId, FontRef as ReadFontRef, TableProvider};

use overlay_core::{
    error::{FontLoadError, OverlayError, Result},
    traits::FontRef as OverlayFontRef,
};

pub mod builtin;

/// File extensions we treat as loadable fonts
pub const FONT_EXTENSIONS: [&str; 4] = ["ttf", "otf", "ttc", "otc"];

/// A font that's been brought into memory, ready to measure and draw text
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
    ascent: f32,
}

impl Font {
    /// Opens a font file from disk and makes it usable
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face from a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FontLoadError::FileNotFound(path.display().to_string()).into(),
            _ => OverlayError::Io(e),
        })?;

        Self::from_data_index(data, face_index)
    }

    /// Turns raw font bytes into something we can work with
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_index(data, 0)
    }

    /// Turns raw font bytes into a specific face (for TTC collections)
    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let font_ref =
            ReadFontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;

        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or(1000);

        // The line box top sits one ascender above the baseline
        let ascent = font_ref
            .hhea()
            .ok()
            .map(|hhea| hhea.ascender().to_i16())
            .filter(|&ascender| ascender > 0)
            .or_else(|| {
                font_ref
                    .os2()
                    .ok()
                    .map(|os2| os2.s_typo_ascender())
                    .filter(|&ascender| ascender > 0)
            })
            .map(f32::from)
            .unwrap_or(f32::from(units_per_em) * 0.8);

        Ok(Font {
            data,
            face_index,
            units_per_em,
            ascent,
        })
    }

    /// Creates a FontRef on-demand for parsing operations
    fn font_ref(&self) -> Option<ReadFontRef<'_>> {
        ReadFontRef::from_index(&self.data, self.face_index).ok()
    }

    /// Finds which glyph draws this character
    pub fn glyph_id(&self, ch: char) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.cmap().ok()?.map_codepoint(ch).map(|gid| gid.to_u32()))
    }

    /// Advance width of a glyph in font units
    pub fn advance_width(&self, glyph_id: u32) -> f32 {
        self.font_ref()
            .and_then(|font| {
                let hmtx = font.hmtx().ok()?;
                hmtx.advance(GlyphId::new(glyph_id))
            })
            .map(f32::from)
            .unwrap_or(f32::from(self.units_per_em) * 0.5)
    }

    /// Counts how many different glyphs this font contains
    pub fn glyph_count(&self) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.maxp().ok().map(|maxp| u32::from(maxp.num_glyphs())))
    }
}

impl OverlayFontRef for Font {
    fn data(&self) -> &[u8] {
        &self.data
    }

    fn face_index(&self) -> u32 {
        self.face_index
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_id(&self, ch: char) -> Option<u32> {
        self.glyph_id(ch)
    }

    fn advance_width(&self, glyph_id: u32) -> f32 {
        self.advance_width(glyph_id)
    }

    fn ascent(&self) -> f32 {
        self.ascent
    }
}

/// What a lookup produced
///
/// `degraded` is true when the requested file could not be used and the
/// built-in face was substituted.
#[derive(Clone)]
pub struct FontResolution {
    pub font: Arc<Font>,
    pub degraded: bool,
}

/// Resolves font file names against one fonts directory
///
/// Meant to live for a single render call.
pub struct FontResolver {
    fonts_dir: PathBuf,
    /// Maps requested names to what they resolved to
    cache: HashMap<String, FontResolution>,
    builtin: Option<Arc<Font>>,
}

impl FontResolver {
    /// Starts an empty resolver rooted at `fonts_dir`
    pub fn new(fonts_dir: impl Into<PathBuf>) -> Self {
        Self {
            fonts_dir: fonts_dir.into(),
            cache: HashMap::new(),
            builtin: None,
        }
    }

    /// The directory names are resolved against
    pub fn fonts_dir(&self) -> &Path {
        &self.fonts_dir
    }

    /// Finds the font called `name`, falling back to the built-in face
    ///
    /// Only fails if the built-in face itself cannot be parsed.
    pub fn resolve(&mut self, name: &str) -> Result<FontResolution> {
        if let Some(resolution) = self.cache.get(name) {
            return Ok(resolution.clone());
        }

        let resolution = match self.load_named(name) {
            Ok(font) => {
                log::debug!("Resolved font '{}' in {}", name, self.fonts_dir.display());
                FontResolution {
                    font: Arc::new(font),
                    degraded: false,
                }
            },
            Err(e) => {
                log::warn!(
                    "Font '{}' unavailable ({}), using built-in {}",
                    name,
                    e,
                    builtin::DEFAULT_FONT_NAME
                );
                FontResolution {
                    font: self.builtin()?,
                    degraded: true,
                }
            },
        };

        self.cache.insert(name.to_string(), resolution.clone());
        Ok(resolution)
    }

    /// The built-in face, parsed on first use
    pub fn builtin(&mut self) -> Result<Arc<Font>> {
        if let Some(font) = &self.builtin {
            return Ok(font.clone());
        }

        let font = Arc::new(builtin::default_font()?);
        self.builtin = Some(font.clone());
        Ok(font)
    }

    /// Lists font file names available in the fonts directory, sorted
    pub fn available_fonts(&self) -> Vec<String> {
        let mut names: Vec<String> = walkdir::WalkDir::new(&self.fonts_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file() && has_font_extension(entry.path()))
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .collect();
        names.sort();
        names
    }

    /// Number of distinct names looked up so far
    pub fn resolved_count(&self) -> usize {
        self.cache.len()
    }

    fn load_named(&self, name: &str) -> Result<Font> {
        if !is_plain_file_name(name) {
            return Err(FontLoadError::InvalidName(name.to_string()).into());
        }
        Font::from_file(self.fonts_dir.join(name))
    }
}

/// Rejects anything that could step outside the fonts directory
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_from_invalid_data() {
        let data = vec![0; 100];
        let result = Font::from_data(data);
        assert!(result.is_err());
    }

    #[test]
    fn test_plain_file_names() {
        assert!(is_plain_file_name("DejaVuSans.ttf"));
        assert!(!is_plain_file_name("../DejaVuSans.ttf"));
        assert!(!is_plain_file_name("sub/DejaVuSans.ttf"));
        assert!(!is_plain_file_name("/etc/passwd"));
        assert!(!is_plain_file_name(""));
        assert!(!is_plain_file_name(".."));
    }

    #[test]
    fn test_font_extensions() {
        assert!(has_font_extension(Path::new("a.TTF")));
        assert!(has_font_extension(Path::new("b.otf")));
        assert!(!has_font_extension(Path::new("c.txt")));
        assert!(!has_font_extension(Path::new("noext")));
    }

    #[test]
    fn test_missing_font_degrades_to_builtin() {
        let mut resolver = FontResolver::new("/nonexistent/fonts");
        let resolution = resolver.resolve("Missing.otf").unwrap();
        assert!(resolution.degraded);
        assert!(resolution.font.glyph_id('A').is_some());
    }

    #[test]
    fn test_traversal_names_degrade_to_builtin() {
        let mut resolver = FontResolver::new("/nonexistent/fonts");
        assert!(resolver.resolve("../fonts/x.ttf").unwrap().degraded);
    }

    #[test]
    fn test_resolutions_are_cached_by_name() {
        let mut resolver = FontResolver::new("/nonexistent/fonts");
        let first = resolver.resolve("A.ttf").unwrap();
        let second = resolver.resolve("A.ttf").unwrap();
        resolver.resolve("B.ttf").unwrap();

        assert!(Arc::ptr_eq(&first.font, &second.font));
        assert_eq!(resolver.resolved_count(), 2);
    }
}
