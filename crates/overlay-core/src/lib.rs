//! Overlay Core: the vocabulary every stage speaks
//!
//! Text blocks go in, draw commands come out, pixels land on an image.
//! This crate holds the types that carry data between those steps:
//!
//! 1. **Block specs** - [`TextBlockSpec`] describes one heading, description
//!    or author block exactly as the caller asked for it
//! 2. **Style** - [`StyleConfig`] holds the global knobs of a render call
//! 3. **Draw commands** - [`DrawCommand`] is one positioned line of text,
//!    ready for the compositor
//!
//! Fonts are reached through [`traits::FontRef`], errors through
//! [`error::OverlayError`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub mod error;
pub mod traits;

pub use error::{OverlayError, Result};
pub use traits::FontRef;

/// The data structures that flow between layout and rendering
pub mod types {
    /// Unique identifier for a glyph within a font
    pub type GlyphId = u32;
}

/// Simple RGBA color that works everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Same color, different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Parses `#RRGGBB` (the `#` is optional, hex digits are case-insensitive)
    ///
    /// The result is always opaque; alpha comes from elsewhere.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(OverlayError::InvalidColorFormat(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| OverlayError::InvalidColorFormat(s.to_string()))
        };

        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Where each line sits horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for HorizontalAlign {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(OverlayError::Config(format!(
                "unknown horizontal alignment '{}' (expected left, center or right)",
                other
            ))),
        }
    }
}

/// Where the whole text stack is anchored vertically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl FromStr for VerticalAnchor {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "middle" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            other => Err(OverlayError::Config(format!(
                "unknown vertical position '{}' (expected top, middle or bottom)",
                other
            ))),
        }
    }
}

/// Drop shadow settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowStyle {
    pub enabled: bool,
    /// Applied to both x and y
    pub offset: i32,
    /// RGB only; alpha comes from `opacity`
    pub color: Color,
    pub opacity: u8,
    /// Gaussian blur radius in pixels, 0 disables blurring
    pub blur_radius: u32,
}

impl ShadowStyle {
    /// The color the shadow layer is painted with
    pub const fn paint_color(&self) -> Color {
        self.color.with_alpha(self.opacity)
    }
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            enabled: false,
            offset: 2,
            color: Color::black(),
            opacity: 128,
            blur_radius: 2,
        }
    }
}

/// Global parameters of one render call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    /// Margin as a percentage of the image width
    pub margin_percent: f32,
    /// Wrap budget as a percentage of the image width
    pub width_percent: f32,
    /// Pixels between lines inside a block
    pub line_spacing: u32,
    pub horizontal_align: HorizontalAlign,
    pub vertical_anchor: VerticalAnchor,
    /// Added below the margin at the top, above it at the bottom
    pub boundary_padding: u32,
    pub shadow: ShadowStyle,
}

impl StyleConfig {
    /// Margin in pixels for an image of this width
    pub fn margin_px(&self, image_width: u32) -> i32 {
        percent_of(self.margin_percent, image_width)
    }

    /// Maximum line width in pixels for an image of this width
    pub fn max_width_px(&self, image_width: u32) -> i32 {
        percent_of(self.width_percent, image_width)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            margin_percent: 5.0,
            width_percent: 80.0,
            line_spacing: 20,
            horizontal_align: HorizontalAlign::Left,
            vertical_anchor: VerticalAnchor::Top,
            boundary_padding: 0,
            shadow: ShadowStyle::default(),
        }
    }
}

fn percent_of(percent: f32, extent: u32) -> i32 {
    (f64::from(percent) / 100.0 * f64::from(extent)).floor() as i32
}

/// Which slot a block fills; also its stacking order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlockRole {
    Heading,
    Description,
    Author,
}

impl BlockRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Description => "description",
            Self::Author => "author",
        }
    }
}

/// One block of text as requested, before fonts are resolved or lines wrapped
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlockSpec {
    pub role: BlockRole,
    pub text: String,
    /// Font file name, resolved against the fonts directory
    pub font: String,
    /// Pixel size
    pub size: u32,
    pub color: Color,
    /// Pixels added after this block when another block follows
    pub padding: u32,
    /// Whether the text is word-wrapped; otherwise it is one line
    pub wrap: bool,
}

impl TextBlockSpec {
    /// Builds a spec; only the author block skips wrapping
    pub fn new(
        role: BlockRole,
        text: impl Into<String>,
        font: impl Into<String>,
        size: u32,
        color: Color,
        padding: u32,
    ) -> Self {
        Self {
            role,
            text: text.into(),
            font: font.into(),
            size,
            color,
            padding,
            wrap: role != BlockRole::Author,
        }
    }

    /// Blank blocks are skipped entirely
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One line of text with everything needed to paint it
#[derive(Clone)]
pub struct DrawCommand {
    pub text: String,
    /// Left edge of the line
    pub x: i32,
    /// Top of the line box; the baseline sits one ascent below
    pub y: i32,
    pub font: Arc<dyn FontRef>,
    /// Pixel size
    pub size: f32,
    pub color: Color,
}

impl fmt::Debug for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawCommand")
            .field("text", &self.text)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("size", &self.size)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}
