//! Error types for the overlay renderer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OverlayError>;

/// Main error type for a render call
///
/// A render call either produces a complete image or fails with one of
/// these. Font fallback is not an error and never shows up here.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("Invalid color format: {0:?} (expected #RRGGBB)")]
    InvalidColorFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("Font name is not a plain file name: {0}")]
    InvalidName(String),
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to allocate layer")]
    PixmapCreationFailed,

    #[error("Failed to extract outline for glyph {0}")]
    OutlineExtractionFailed(u32),

    #[error("Font data could not be parsed for rasterization")]
    InvalidFont,

    #[error("Backend error: {0}")]
    BackendError(String),
}
