//! Skia Compositor - text and drop shadows on tiny-skia layers
//!
//! Nothing is painted straight onto the caller's image. Every line is
//! filled into a transparent text layer, and when shadows are on, into a
//! second transparent shadow layer at an offset. The shadow layer is blurred
//! as a whole, then both are blended over the base in a fixed order:
//!
//! ```text
//! base  <-  shadow layer (source-over)  <-  text layer (source-over)
//! ```
//!
//! Because all shadows share one layer and all text shares another, no
//! shadow ever lands on top of text, whatever order the blocks come in.

pub mod blur;
pub mod raster;

use image::RgbImage;
use overlay_core::{
    error::{RenderError, Result},
    Color, DrawCommand, ShadowStyle,
};
use tiny_skia::{FillRule, Paint, Pixmap, PixmapPaint, Transform};

/// Composites draw commands onto an RGB image using tiny-skia
pub struct Compositor {
    /// Maximum canvas dimension to prevent memory exhaustion
    max_size: u32,
}

impl Compositor {
    pub fn new() -> Self {
        Self { max_size: 65535 }
    }

    /// Short label for logs
    pub fn name(&self) -> &'static str {
        "skia"
    }

    /// Paints `commands` over a copy of `base` and returns the flattened result
    ///
    /// The shadow layer is only allocated when `shadow.enabled` is set.
    pub fn composite(
        &self,
        base: &RgbImage,
        commands: &[DrawCommand],
        shadow: &ShadowStyle,
    ) -> Result<RgbImage> {
        let (width, height) = base.dimensions();
        if width == 0 || height == 0 || width > self.max_size || height > self.max_size {
            return Err(RenderError::InvalidDimensions { width, height }.into());
        }

        let mut text_layer = new_layer(width, height)?;
        let mut shadow_layer = if shadow.enabled {
            Some(new_layer(width, height)?)
        } else {
            None
        };
        let shadow_shift = Transform::from_translate(shadow.offset as f32, shadow.offset as f32);
        let mut painted = 0usize;

        for command in commands {
            let font = command.font.as_ref();
            let baseline = command.y as f32 + font.ascent() * font.scale(command.size);
            let Some(path) = raster::glyph_run_path(
                font,
                &command.text,
                command.size,
                command.x as f32,
                baseline,
            )?
            else {
                continue;
            };

            if let Some(layer) = shadow_layer.as_mut() {
                fill(layer, &path, shadow.paint_color(), shadow_shift);
            }
            fill(
                &mut text_layer,
                &path,
                command.color.with_alpha(255),
                Transform::identity(),
            );
            painted += 1;
        }

        log::debug!(
            "Skia: painted {} of {} lines on {}x{} (shadow: {})",
            painted,
            commands.len(),
            width,
            height,
            shadow.enabled
        );

        let mut canvas = to_canvas(base)?;
        if painted > 0 {
            if let Some(layer) = shadow_layer {
                let layer = blur::gaussian_blur(layer, shadow.blur_radius)?;
                blend(&mut canvas, &layer);
            }
            blend(&mut canvas, &text_layer);
        }

        flatten(&canvas)
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

fn new_layer(width: u32, height: u32) -> Result<Pixmap> {
    Pixmap::new(width, height).ok_or_else(|| RenderError::PixmapCreationFailed.into())
}

fn fill(layer: &mut Pixmap, path: &tiny_skia::Path, color: Color, transform: Transform) {
    let mut paint = Paint {
        anti_alias: true,
        ..Default::default()
    };
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    layer.fill_path(path, &paint, FillRule::Winding, transform, None);
}

fn blend(canvas: &mut Pixmap, layer: &Pixmap) {
    canvas.draw_pixmap(
        0,
        0,
        layer.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
}

/// Opaque working copy of the base image
fn to_canvas(base: &RgbImage) -> Result<Pixmap> {
    let mut canvas = new_layer(base.width(), base.height())?;
    for (dst, src) in canvas.data_mut().chunks_exact_mut(4).zip(base.pixels()) {
        dst[0] = src[0];
        dst[1] = src[1];
        dst[2] = src[2];
        dst[3] = 255;
    }
    Ok(canvas)
}

/// Drops alpha; the canvas stays opaque so premultiplied equals straight
fn flatten(canvas: &Pixmap) -> Result<RgbImage> {
    let rgb: Vec<u8> = canvas
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();
    RgbImage::from_raw(canvas.width(), canvas.height(), rgb).ok_or_else(|| {
        RenderError::BackendError("flattened buffer does not match canvas size".into()).into()
    })
}
