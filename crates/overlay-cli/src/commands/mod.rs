//! Subcommand implementations

pub mod fonts;
pub mod render;
