//! CLI argument definitions using Clap v4

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use overlay::{HorizontalAlign, VerticalAnchor};

/// Environment variable naming the fonts directory
pub const FONTS_DIR_ENV: &str = "OVERLAY_FONTS_DIR";

/// Overlay - draw text blocks onto images
#[derive(Parser, Debug)]
#[command(name = "overlay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render heading, description and author text onto an image
    #[command(alias = "r")]
    Render(Box<RenderArgs>),

    /// List font files available in the fonts directory
    Fonts(FontsArgs),
}

/// Where fonts are looked up
#[derive(Args, Debug)]
pub struct FontDirArgs {
    /// Fonts directory (defaults to $OVERLAY_FONTS_DIR, then ./fonts)
    #[arg(long = "fonts-dir", env = FONTS_DIR_ENV, default_value = "fonts")]
    pub fonts_dir: PathBuf,
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Input image
    pub input: PathBuf,

    /// Output image (format from extension)
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// JSON object with overlay parameters; flags below override it
    #[arg(short = 'p', long = "params")]
    pub params: Option<String>,

    #[command(flatten)]
    pub fonts: FontDirArgs,

    /// Heading text
    #[arg(long)]
    pub heading: Option<String>,

    /// Description text
    #[arg(long)]
    pub description: Option<String>,

    /// Author text
    #[arg(long)]
    pub author: Option<String>,

    /// Horizontal alignment: left, center, right
    #[arg(short = 'a', long = "align")]
    pub align: Option<HorizontalAlign>,

    /// Vertical anchor: top, middle, bottom
    #[arg(long = "anchor")]
    pub anchor: Option<VerticalAnchor>,

    /// Enable drop shadows
    #[arg(long)]
    pub shadow: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the fonts command
#[derive(Parser, Debug)]
pub struct FontsArgs {
    #[command(flatten)]
    pub fonts: FontDirArgs,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
