//! Render command implementation
//!
//! Loads an image, applies flags on top of the JSON parameters, renders and
//! writes the result.

use anyhow::{Context, Result};
use overlay::{OverlayParams, TextOverlay};

use crate::cli::RenderArgs;

pub fn run(args: &RenderArgs) -> Result<()> {
    let params = build_params(args)?;

    let input = image::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?
        .to_rgb8();

    let overlay = TextOverlay::new(&args.fonts.fonts_dir);
    let report = overlay
        .render_with_report(&input, &params)
        .context("Failed to render overlay")?;

    for name in &report.degraded_fonts {
        eprintln!("warning: font '{}' not usable, used the built-in face", name);
    }

    report
        .image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    eprintln!(
        "Rendered {} blocks ({} lines) to {}",
        report.blocks,
        report.lines,
        args.output.display()
    );
    Ok(())
}

/// JSON parameters first, then individual flags on top
fn build_params(args: &RenderArgs) -> Result<OverlayParams> {
    let mut params = match &args.params {
        Some(json) => OverlayParams::from_json(json).context("Failed to parse --params")?,
        None => OverlayParams::default(),
    };

    if let Some(heading) = &args.heading {
        params.heading = heading.clone();
    }
    if let Some(description) = &args.description {
        params.description = description.clone();
    }
    if let Some(author) = &args.author {
        params.author = author.clone();
    }
    if let Some(align) = args.align {
        params.horizontal_align = align;
    }
    if let Some(anchor) = args.anchor {
        params.vertical_position = anchor;
    }
    if args.shadow {
        params.shadow_enabled = true;
    }

    log::debug!("Render parameters: {}", serde_json::to_string(&params)?);
    Ok(params)
}
