use colored::Colorize;
use link_scanner::{LanguageFiles, ScanResult, Scanner, ScannerConfig};

use super::{absolute, build_scanner};
use crate::cli::TargetArgs;
use crate::error::Result;

pub fn run_scan(target: &TargetArgs) -> Result<()> {
    // Scanning never computes destinations, so the site root is unused.
    let mut config = ScannerConfig::new("");
    if let Some(language_root) = &target.language_root {
        config.language_root = Some(absolute(language_root)?);
    }

    let mut scanner = build_scanner(target, &config)?;
    let result = scanner.scan()?;

    if target.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_scan(&result);
    }
    Ok(())
}

fn print_scan(result: &ScanResult) {
    println!("{} {}", result.extension_type.to_string().cyan(), result.extension.bold());

    if let Some(folder) = &result.site_folder {
        println!("  {:<18}{}", "site folder:", folder);
    }
    if let Some(folder) = &result.admin_folder {
        println!("  {:<18}{}", "admin folder:", folder);
    }
    if let Some(group) = &result.plugin_folder {
        println!("  {:<18}{}", "plugin group:", group);
    }
    if let Some(folder) = &result.media_folder {
        let destination = result.media_destination.as_deref().unwrap_or("-");
        println!("  {:<18}{} {} {}", "media:", folder, "->".dimmed(), destination);
    }
    print_languages("site languages:", result.site_languages.as_ref());
    print_languages("admin languages:", result.admin_languages.as_ref());

    if result.is_empty() {
        println!("  {}", "nothing to link".yellow());
    }
}

fn print_languages(label: &str, languages: Option<&LanguageFiles>) {
    let Some(languages) = languages else {
        return;
    };
    println!("  {:<18}{}", label, languages.root);
    for file in &languages.files {
        println!("    {file}");
    }
}
