// this_file: crates/overlay-cli/src/main.rs

//! Overlay CLI: draw heading, description and author text onto images.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => {
            init_logger(args.verbose);
            commands::render::run(&args)
        },
        Commands::Fonts(args) => {
            init_logger(args.verbose);
            commands::fonts::run(&args)
        },
    }
}

/// Initialize logging based on verbosity flag.
fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
