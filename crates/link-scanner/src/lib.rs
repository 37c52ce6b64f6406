//! Manifest-driven scan and link-map engine for CMS extensions.
//!
//! A scanner reads an extension's installer manifest from its source tree
//! ([`Scanner::scan`]) and computes where each declared folder and language
//! file would live inside a target installation ([`Scanner::map`]). The
//! resulting [`MapResult`] is consumed by an external linker; nothing here
//! writes to the filesystem.
//!
//! ```rust,no_run
//! use link_scanner::{ModuleScanner, Scanner, ScannerConfig};
//!
//! let config = ScannerConfig::new("/var/www/site");
//! let mut scanner = ModuleScanner::new("/home/dev/mod_example", &config);
//! scanner.scan()?;
//! for (source, destination) in &scanner.map()?.dirs {
//!     println!("{source} -> {destination}");
//! }
//! # Ok::<(), link_scanner::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod language;
pub mod module;
pub mod plugin;
pub mod result;
pub mod scanner;

pub use config::ScannerConfig;
pub use error::{Error, Result};
pub use language::LanguageResolver;
pub use module::ModuleScanner;
pub use plugin::PluginScanner;
pub use result::{ClientScope, ExtensionType, LanguageFiles, MapResult, ScanResult};
pub use scanner::{Scanner, ScannerCore};

use link_fs::NormalizedPath;

/// Construct the scanner for `kind`.
pub fn scanner_for(
    kind: ExtensionType,
    extension_root: impl Into<NormalizedPath>,
    config: &ScannerConfig,
) -> Box<dyn Scanner> {
    match kind {
        ExtensionType::Module => Box::new(ModuleScanner::new(extension_root, config)),
        ExtensionType::Plugin => Box::new(PluginScanner::new(extension_root, config)),
    }
}

/// Construct the scanner matching the type declared by the manifest under
/// `extension_root`.
pub fn detect_scanner(
    extension_root: impl Into<NormalizedPath>,
    config: &ScannerConfig,
) -> Result<Box<dyn Scanner>> {
    let root = extension_root.into();
    let declared = link_manifest::detect_extension_type(&root)?;
    let kind = declared
        .parse::<ExtensionType>()
        .map_err(|_| Error::UnsupportedType {
            kind: declared.clone(),
            root: root.to_native(),
        })?;

    tracing::debug!(%kind, root = %root, "detected extension type");
    Ok(scanner_for(kind, root, config))
}
