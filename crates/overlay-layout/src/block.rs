//! Text blocks ready for placement and the height of a stack of them

use std::sync::Arc;

use overlay_core::{traits::FontRef, Color, TextBlockSpec};

use crate::wrap::wrap_text;

/// A block whose font is resolved and whose lines are final
#[derive(Clone)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub font: Arc<dyn FontRef>,
    /// Pixel size
    pub size: u32,
    pub color: Color,
    /// Pixels after this block, used only when another block follows
    pub padding: u32,
}

impl TextBlock {
    /// Wraps the spec's text (unless it opts out) into a block
    ///
    /// Returns `None` when there is nothing to draw, so blank blocks drop
    /// out of the stack without contributing height or padding.
    pub fn from_spec(spec: &TextBlockSpec, font: Arc<dyn FontRef>, max_width: f32) -> Option<Self> {
        if spec.is_empty() {
            return None;
        }

        let lines = if spec.wrap {
            wrap_text(&spec.text, font.as_ref(), spec.size as f32, max_width)
        } else {
            vec![spec.text.clone()]
        };

        if lines.is_empty() {
            return None;
        }

        Some(Self {
            lines,
            font,
            size: spec.size,
            color: spec.color,
            padding: spec.padding,
        })
    }

    /// Height of the block's own lines, without trailing padding
    pub fn height(&self, line_spacing: u32) -> i32 {
        let count = self.lines.len() as i32;
        if count == 0 {
            return 0;
        }
        self.size as i32 * count + line_spacing as i32 * (count - 1)
    }
}

/// Total vertical extent of a stack of blocks
///
/// Each block contributes its line height; padding counts only between
/// neighbours, never after the last block.
pub fn stack_height(blocks: &[TextBlock], line_spacing: u32) -> i32 {
    let lines: i32 = blocks.iter().map(|b| b.height(line_spacing)).sum();
    let padding: i32 = blocks
        .iter()
        .rev()
        .skip(1)
        .map(|b| b.padding as i32)
        .sum();
    lines + padding
}
