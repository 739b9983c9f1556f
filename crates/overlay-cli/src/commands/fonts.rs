//! Fonts command implementation
//!
//! Lists the font files a render would find by name.

use anyhow::{ensure, Result};
use overlay::fontdb::FontResolver;

use crate::cli::FontsArgs;

pub fn run(args: &FontsArgs) -> Result<()> {
    let dir = &args.fonts.fonts_dir;
    ensure!(dir.is_dir(), "Fonts directory {} does not exist", dir.display());

    let fonts = FontResolver::new(dir).available_fonts();
    if fonts.is_empty() {
        eprintln!("No font files in {}", dir.display());
        return Ok(());
    }

    println!("Fonts in {}:", dir.display());
    for name in fonts {
        println!("  {}", name);
    }
    Ok(())
}
