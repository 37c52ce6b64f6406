//! Scanner for plugins.

use link_fs::NormalizedPath;

use crate::config::ScannerConfig;
use crate::error::{Error, Result};
use crate::result::{ExtensionType, MapResult, ScanResult};
use crate::scanner::{Scanner, ScannerCore};

/// Plugins are installed into `plugins/{group}/{name}`. They have no client
/// duality and their language strings are loaded by the back-end only, so
/// language files always land in the administrator slot.
#[derive(Debug, Clone)]
pub struct PluginScanner {
    core: ScannerCore,
}

impl PluginScanner {
    pub fn new(extension_root: impl Into<NormalizedPath>, config: &ScannerConfig) -> Self {
        Self {
            core: ScannerCore::new(ExtensionType::Plugin, extension_root, config),
        }
    }
}

impl Scanner for PluginScanner {
    fn core(&self) -> &ScannerCore {
        &self.core
    }

    fn scan(&mut self) -> Result<ScanResult> {
        self.core.scan_with(|core| {
            let manifest = core.load_manifest()?;
            let mut result =
                ScanResult::new(ExtensionType::Plugin, core.extension_name(&manifest)?);

            let group = manifest
                .group()
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .ok_or_else(|| Error::MissingAttribute {
                    kind: ExtensionType::Plugin,
                    attribute: "group",
                    root: core.extension_root().to_native(),
                })?;
            result.plugin_folder = Some(group.to_string());
            result.site_folder = Some(core.extension_root().clone());

            core.apply_media(&manifest, &mut result);

            for languages in core.language_sets(&manifest) {
                result.admin_languages = Some(languages);
            }

            Ok(result)
        })
    }

    fn map(&self) -> Result<MapResult> {
        let scan = self.core.scan_results()?;
        let mut result = self.core.map()?;

        self.core.map_media(scan, &mut result);

        if let (Some(source), Some(group)) = (&scan.site_folder, &scan.plugin_folder) {
            let destination = self
                .core
                .site_root()
                .join("plugins")
                .join(group)
                .join(&scan.extension);
            result.add_dir(source.clone(), destination);
        }

        Ok(result)
    }
}
