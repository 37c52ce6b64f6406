//! Scanner configuration.
//!
//! ```toml
//! site_root = "/var/www/joomla"
//! language_root = "/home/dev/translations/mod_example"
//! ```

use std::path::Path;

use link_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings shared by every scanner instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Root of the target installation; destinations are computed under it.
    pub site_root: NormalizedPath,
    /// Replaces the manifest-declared language root when set.
    #[serde(default)]
    pub language_root: Option<NormalizedPath>,
}

impl ScannerConfig {
    pub fn new(site_root: impl Into<NormalizedPath>) -> Self {
        Self {
            site_root: site_root.into(),
            language_root: None,
        }
    }

    pub fn with_language_root(mut self, language_root: impl Into<NormalizedPath>) -> Self {
        self.language_root = Some(language_root.into());
        self
    }

    /// Load from a `.toml`, `.json`, `.yaml` or `.yml` file.
    ///
    /// Relative roots in the file are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config: Self = ConfigStore::new().load(&NormalizedPath::new(path))?;

        let base = path.parent().unwrap_or(Path::new(""));
        config.site_root = resolve_against(base, &config.site_root);
        config.language_root = config
            .language_root
            .map(|root| resolve_against(base, &root));
        Ok(config)
    }
}

fn resolve_against(base: &Path, path: &NormalizedPath) -> NormalizedPath {
    let native = path.to_native();
    if native.is_absolute() {
        path.clone()
    } else {
        NormalizedPath::new(base.join(native))
    }
}
