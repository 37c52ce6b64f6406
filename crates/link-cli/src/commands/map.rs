use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;
use link_fs::NormalizedPath;
use link_scanner::{MapResult, Scanner, ScannerConfig};

use super::{absolute, build_scanner};
use crate::cli::TargetArgs;
use crate::error::{CliError, Result};

pub fn run_map(
    target: &TargetArgs,
    site_root: Option<&Path>,
    config_file: Option<&Path>,
) -> Result<()> {
    let config = resolve_config(target, site_root, config_file)?;

    let mut scanner = build_scanner(target, &config)?;
    scanner.scan()?;
    let result = scanner.map()?;

    if target.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_map(&result);
    }
    Ok(())
}

/// Flags override values from the config file.
fn resolve_config(
    target: &TargetArgs,
    site_root: Option<&Path>,
    config_file: Option<&Path>,
) -> Result<ScannerConfig> {
    let mut config = match (config_file, site_root) {
        (Some(path), _) => ScannerConfig::load(&std::path::absolute(path)?)?,
        (None, Some(site_root)) => ScannerConfig::new(absolute(site_root)?),
        (None, None) => {
            return Err(CliError::user(
                "--site-root is required when no --config file is given",
            ));
        }
    };

    if let Some(site_root) = site_root {
        config.site_root = absolute(site_root)?;
    }
    if let Some(language_root) = &target.language_root {
        config.language_root = Some(absolute(language_root)?);
    }

    tracing::debug!(site_root = %config.site_root, "resolved scanner config");
    Ok(config)
}

fn print_map(result: &MapResult) {
    if result.is_empty() {
        println!("{}", "nothing to link".yellow());
        return;
    }
    print_section("dirs", &result.dirs);
    print_section("files", &result.files);
}

fn print_section(title: &str, entries: &BTreeMap<NormalizedPath, NormalizedPath>) {
    if entries.is_empty() {
        return;
    }
    println!("{}", format!("{title}:").bold());
    for (source, destination) in entries {
        println!("  {} {} {}", source, "->".dimmed(), destination);
    }
}
