//! Gaussian blur for overlay layers

use image::{imageops, RgbaImage};
use overlay_core::error::{RenderError, Result};
use tiny_skia::{IntSize, Pixmap};

/// Blurs a whole layer with the given radius (used as the Gaussian sigma)
///
/// The layer holds premultiplied pixels. Blurring every channel with the
/// same kernel keeps them premultiplied, up to rounding, which is clamped
/// away afterwards.
pub fn gaussian_blur(layer: Pixmap, radius: u32) -> Result<Pixmap> {
    if radius == 0 {
        return Ok(layer);
    }

    let (width, height) = (layer.width(), layer.height());
    let rgba = RgbaImage::from_raw(width, height, layer.take()).ok_or_else(|| {
        RenderError::BackendError("layer buffer does not match its dimensions".into())
    })?;

    let mut data = imageops::blur(&rgba, radius as f32).into_raw();
    for px in data.chunks_exact_mut(4) {
        let alpha = px[3];
        px[0] = px[0].min(alpha);
        px[1] = px[1].min(alpha);
        px[2] = px[2].min(alpha);
    }

    log::debug!("Blurred {}x{} layer with radius {}", width, height, radius);

    let size =
        IntSize::from_wh(width, height).ok_or(RenderError::InvalidDimensions { width, height })?;
    Pixmap::from_vec(data, size).ok_or_else(|| RenderError::PixmapCreationFailed.into())
}
