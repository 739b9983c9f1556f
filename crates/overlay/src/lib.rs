//! Overlay - heading, description and author text on top of an image
//!
//! One call takes an image and a flat parameter set and returns a new image:
//!
//! 1. Validate parameters and parse every color
//! 2. Resolve each block's font (unknown files fall back to a built-in face)
//! 3. Wrap text into lines and measure the stack
//! 4. Place every line according to alignment and anchor
//! 5. Fill text and optional drop shadows on separate layers and composite
//!
//! # Example
//!
//! ```ignore
//! use overlay::{OverlayParams, TextOverlay};
//!
//! let image = image::open("photo.jpg")?.to_rgb8();
//! let params = OverlayParams {
//!     heading: "Hello".into(),
//!     shadow_enabled: true,
//!     ..OverlayParams::default()
//! };
//! let output = TextOverlay::new("fonts").render(&image, &params)?;
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbImage;

pub mod params;
pub mod tensor;

pub use overlay_core::{
    error, traits, BlockRole, Color, DrawCommand, HorizontalAlign, ShadowStyle, StyleConfig,
    TextBlockSpec, VerticalAnchor,
};
pub use overlay_fontdb as fontdb;
pub use overlay_layout as layout;
pub use overlay_render_skia as render;
pub use params::OverlayParams;

use overlay_core::{error::Result, traits::FontRef};
use overlay_fontdb::FontResolver;
use overlay_layout::{layout_blocks, TextBlock};
use overlay_render_skia::Compositor;

/// What a render produced, beyond the pixels
#[derive(Debug, Clone)]
pub struct RenderReport {
    pub image: RgbImage,
    /// Blocks that made it into the stack
    pub blocks: usize,
    /// Lines drawn across all blocks
    pub lines: usize,
    /// Requested font names that were replaced by the built-in face
    pub degraded_fonts: Vec<String>,
}

/// Renders text overlays with fonts from one directory
pub struct TextOverlay {
    fonts_dir: PathBuf,
    compositor: Compositor,
}

impl TextOverlay {
    pub fn new(fonts_dir: impl Into<PathBuf>) -> Self {
        Self {
            fonts_dir: fonts_dir.into(),
            compositor: Compositor::new(),
        }
    }

    pub fn fonts_dir(&self) -> &Path {
        &self.fonts_dir
    }

    /// Draws the configured blocks over a copy of `image`
    pub fn render(&self, image: &RgbImage, params: &OverlayParams) -> Result<RgbImage> {
        Ok(self.render_with_report(image, params)?.image)
    }

    /// Like [`render`](Self::render), also reporting what was drawn
    pub fn render_with_report(
        &self,
        image: &RgbImage,
        params: &OverlayParams,
    ) -> Result<RenderReport> {
        params.validate()?;
        let style = params.style()?;
        let specs = params.block_specs()?;

        if specs.iter().all(TextBlockSpec::is_empty) {
            log::debug!("Overlay: no text, returning input unchanged");
            return Ok(RenderReport {
                image: image.clone(),
                blocks: 0,
                lines: 0,
                degraded_fonts: Vec::new(),
            });
        }

        let (width, height) = image.dimensions();
        let max_width = style.max_width_px(width) as f32;
        let mut resolver = FontResolver::new(&self.fonts_dir);
        let mut degraded_fonts = Vec::new();
        let mut blocks = Vec::with_capacity(specs.len());

        for spec in specs.iter().filter(|spec| !spec.is_empty()) {
            let resolution = resolver.resolve(&spec.font)?;
            if resolution.degraded && !degraded_fonts.contains(&spec.font) {
                degraded_fonts.push(spec.font.clone());
            }

            let font: Arc<dyn FontRef> = resolution.font;
            match TextBlock::from_spec(spec, font, max_width) {
                Some(block) => blocks.push(block),
                None => log::debug!("Overlay: {} block has no lines", spec.role.as_str()),
            }
        }

        let commands = layout_blocks(width, height, &style, &blocks);
        let output = self.compositor.composite(image, &commands, &style.shadow)?;

        log::debug!(
            "Overlay: {} blocks, {} lines via {} on {}x{}",
            blocks.len(),
            commands.len(),
            self.compositor.name(),
            width,
            height
        );

        Ok(RenderReport {
            image: output,
            blocks: blocks.len(),
            lines: commands.len(),
            degraded_fonts,
        })
    }

    /// Renders normalized HWC float data and returns data of the same shape
    pub fn render_normalized(
        &self,
        data: &[f32],
        width: u32,
        height: u32,
        params: &OverlayParams,
    ) -> Result<Vec<f32>> {
        let image = tensor::image_from_normalized(data, width, height)?;
        let output = self.render(&image, params)?;
        Ok(tensor::image_to_normalized(&output))
    }
}

/// One-shot render with fonts from `fonts_dir`
pub fn render_overlay(
    image: &RgbImage,
    params: &OverlayParams,
    fonts_dir: impl AsRef<Path>,
) -> Result<RgbImage> {
    TextOverlay::new(fonts_dir.as_ref()).render(image, params)
}

/// Common imports for typical usage
pub mod prelude {
    pub use crate::{render_overlay, OverlayParams, RenderReport, TextOverlay};
    pub use overlay_core::{
        error::{OverlayError, Result},
        Color, HorizontalAlign, VerticalAnchor,
    };
}
