//! Turning a stack of blocks into positioned draw commands
//!
//! Positions are not clamped to the canvas. A stack taller than the image
//! gets a negative start under the middle and bottom anchors and simply
//! runs off the edge.

use overlay_core::{DrawCommand, HorizontalAlign, StyleConfig, VerticalAnchor};

use crate::block::{stack_height, TextBlock};
use crate::measure::text_width;

/// Where the first line's box starts
pub fn start_y(
    anchor: VerticalAnchor,
    image_height: u32,
    total_height: i32,
    margin: i32,
    boundary_padding: u32,
) -> i32 {
    let image_height = image_height as i32;
    let boundary_padding = boundary_padding as i32;
    match anchor {
        VerticalAnchor::Top => margin + boundary_padding,
        VerticalAnchor::Middle => (image_height - total_height).div_euclid(2),
        VerticalAnchor::Bottom => image_height - total_height - margin - boundary_padding,
    }
}

/// Where a line of the given width starts
pub fn line_x(align: HorizontalAlign, image_width: u32, line_width: f32, margin: i32) -> i32 {
    let image_width = image_width as f32;
    match align {
        HorizontalAlign::Left => margin,
        HorizontalAlign::Center => ((image_width - line_width) / 2.0).floor() as i32,
        HorizontalAlign::Right => (image_width - line_width - margin as f32).floor() as i32,
    }
}

/// Places every line of every block on an image of the given size
///
/// The cursor moves down `size + line_spacing` after each line and by the
/// block's padding between blocks.
pub fn layout_blocks(
    image_width: u32,
    image_height: u32,
    style: &StyleConfig,
    blocks: &[TextBlock],
) -> Vec<DrawCommand> {
    let margin = style.margin_px(image_width);
    let total_height = stack_height(blocks, style.line_spacing);
    let mut y = start_y(
        style.vertical_anchor,
        image_height,
        total_height,
        margin,
        style.boundary_padding,
    );

    log::debug!(
        "Layout: {} blocks, total height {}, start y {} ({:?})",
        blocks.len(),
        total_height,
        y,
        style.vertical_anchor
    );

    let mut commands = Vec::with_capacity(blocks.iter().map(|b| b.lines.len()).sum());
    for (index, block) in blocks.iter().enumerate() {
        let size = block.size as f32;
        for line in &block.lines {
            let width = text_width(block.font.as_ref(), line, size);
            let x = line_x(style.horizontal_align, image_width, width, margin);

            commands.push(DrawCommand {
                text: line.clone(),
                x,
                y,
                font: block.font.clone(),
                size,
                color: block.color,
            });

            y += block.size as i32 + style.line_spacing as i32;
        }

        if index + 1 < blocks.len() {
            y += block.padding as i32;
        }
    }

    commands
}
