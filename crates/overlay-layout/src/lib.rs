//! Overlay Layout: from block specs to positioned lines
//!
//! Three small steps, all pure functions of their inputs:
//!
//! - [`wrap::wrap_text`] breaks a block's text into lines that fit a pixel width
//! - [`block::stack_height`] measures how tall the stack of blocks is
//! - [`layout::layout_blocks`] anchors the stack and aligns every line,
//!   producing [`overlay_core::DrawCommand`]s for the compositor
//!
//! Line spacing is always passed in explicitly; nothing here keeps state
//! between calls.

pub mod block;
pub mod layout;
pub mod measure;
pub mod wrap;

pub use block::{stack_height, TextBlock};
pub use layout::{layout_blocks, line_x, start_y};
pub use measure::{space_width, text_width};
pub use wrap::wrap_text;
