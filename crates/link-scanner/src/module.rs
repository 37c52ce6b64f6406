//! Scanner for site and administrator modules.

use link_fs::NormalizedPath;

use crate::config::ScannerConfig;
use crate::error::Result;
use crate::result::{ClientScope, ExtensionType, MapResult, ScanResult};
use crate::scanner::{Scanner, ScannerCore};

/// Modules are installed into `[administrator/]modules/{name}` depending on
/// the manifest's `client` attribute. Language files follow the same scope.
#[derive(Debug, Clone)]
pub struct ModuleScanner {
    core: ScannerCore,
}

impl ModuleScanner {
    pub fn new(extension_root: impl Into<NormalizedPath>, config: &ScannerConfig) -> Self {
        Self {
            core: ScannerCore::new(ExtensionType::Module, extension_root, config),
        }
    }
}

impl Scanner for ModuleScanner {
    fn core(&self) -> &ScannerCore {
        &self.core
    }

    fn scan(&mut self) -> Result<ScanResult> {
        self.core.scan_with(|core| {
            let manifest = core.load_manifest()?;
            let mut result =
                ScanResult::new(ExtensionType::Module, core.extension_name(&manifest)?);

            let scope = ClientScope::from_client(manifest.client());
            match scope {
                ClientScope::Site => result.site_folder = Some(core.extension_root().clone()),
                ClientScope::Administrator => {
                    result.admin_folder = Some(core.extension_root().clone())
                }
            }

            core.apply_media(&manifest, &mut result);

            for languages in core.language_sets(&manifest) {
                match scope {
                    ClientScope::Site => result.site_languages = Some(languages),
                    ClientScope::Administrator => result.admin_languages = Some(languages),
                }
            }

            Ok(result)
        })
    }

    fn map(&self) -> Result<MapResult> {
        let scan = self.core.scan_results()?;
        let mut result = self.core.map()?;

        let (source, scope) = match (&scan.admin_folder, &scan.site_folder) {
            (Some(admin), _) => (admin, ClientScope::Administrator),
            (None, Some(site)) => (site, ClientScope::Site),
            (None, None) => return Ok(result),
        };

        self.core.map_media(scan, &mut result);

        let destination = scope
            .base(self.core.site_root())
            .join("modules")
            .join(&scan.extension);
        result.add_dir(source.clone(), destination);

        Ok(result)
    }
}
