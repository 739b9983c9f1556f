//! Conversion between host tensors and images
//!
//! Hosts hand over `height x width x 3` float data in `[0, 1]`, row-major,
//! channels last. Rendering works on 8-bit RGB. Channels are scaled by 255
//! and rounded, so `byte -> float -> byte` is lossless.

use image::RgbImage;
use overlay_core::error::{OverlayError, Result};

/// Builds an image from normalized HWC float data
///
/// Values outside `[0, 1]` are clamped; NaN becomes 0.
pub fn image_from_normalized(data: &[f32], width: u32, height: u32) -> Result<RgbImage> {
    let expected = width as usize * height as usize * 3;
    if data.len() != expected {
        return Err(OverlayError::Config(format!(
            "tensor has {} values, expected {} for {}x{}x3",
            data.len(),
            expected,
            height,
            width
        )));
    }

    let bytes = data.iter().map(|&v| to_byte(v)).collect();
    RgbImage::from_raw(width, height, bytes)
        .ok_or_else(|| OverlayError::Config(format!("cannot build {}x{} image", width, height)))
}

/// Flattens an image back to normalized HWC float data
pub fn image_to_normalized(image: &RgbImage) -> Vec<f32> {
    image.as_raw().iter().map(|&b| f32::from(b) / 255.0).collect()
}

fn to_byte(v: f32) -> u8 {
    // `as` saturates and maps NaN to 0
    (v * 255.0).round() as u8
}
