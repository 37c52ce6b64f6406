//! linkmap CLI
//!
//! Prints the scan and link map of an extension source tree. Creating the
//! links is left to the caller.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.command {
        Commands::Detect { extension_root } => commands::run_detect(&extension_root),
        Commands::Scan { target } => commands::run_scan(&target),
        Commands::Map {
            target,
            site_root,
            config,
        } => commands::run_map(&target, site_root.as_deref(), config.as_deref()),
    }
}
