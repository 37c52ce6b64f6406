//! Command implementations

mod detect;
mod map;
mod scan;

pub use detect::run_detect;
pub use map::run_map;
pub use scan::run_scan;

use std::path::Path;

use link_scanner::{Scanner, ScannerConfig, detect_scanner, scanner_for};

use crate::cli::TargetArgs;
use crate::error::Result;

/// Build the scanner selected by `target`, detecting the type when needed.
fn build_scanner(target: &TargetArgs, config: &ScannerConfig) -> Result<Box<dyn Scanner>> {
    let root = std::path::absolute(&target.extension_root)?;
    let scanner = match target.kind {
        Some(kind) => scanner_for(kind, root.as_path(), config),
        None => detect_scanner(root.as_path(), config)?,
    };
    Ok(scanner)
}

fn absolute(path: &Path) -> Result<link_fs::NormalizedPath> {
    Ok(std::path::absolute(path)?.into())
}
