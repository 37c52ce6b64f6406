//! Scanner contract and the shared scan/map scaffolding.
//!
//! A scanner runs in two phases. [`Scanner::scan`] reads the installer
//! manifest and caches a [`ScanResult`]; [`Scanner::map`] turns the cached
//! result into a [`MapResult`]. Type-specific scanners own a
//! [`ScannerCore`], which loads the manifest, resolves media and language
//! blocks, and produces the language part of every map.

use link_fs::NormalizedPath;
use link_manifest::InstallerManifest;

use crate::config::ScannerConfig;
use crate::error::{Error, Result};
use crate::language::LanguageResolver;
use crate::result::{ClientScope, ExtensionType, LanguageFiles, MapResult, ScanResult};

/// Two-phase discovery and mapping for one extension source tree.
///
/// Instances are not meant for concurrent use; wrap one in a mutex or use
/// one instance per worker.
pub trait Scanner: Send {
    /// Shared state and helpers.
    fn core(&self) -> &ScannerCore;

    /// Read the manifest and cache a fresh result.
    ///
    /// On failure nothing stays cached, including any earlier result.
    fn scan(&mut self) -> Result<ScanResult>;

    /// Translate the cached scan into link instructions.
    fn map(&self) -> Result<MapResult>;

    fn extension_type(&self) -> ExtensionType {
        self.core().kind()
    }

    fn extension_root(&self) -> &NormalizedPath {
        self.core().extension_root()
    }

    /// The result of the last successful scan.
    fn scan_results(&self) -> Result<&ScanResult> {
        self.core().scan_results()
    }
}

/// State and behaviour common to every extension type.
#[derive(Debug, Clone)]
pub struct ScannerCore {
    kind: ExtensionType,
    extension_root: NormalizedPath,
    site_root: NormalizedPath,
    language_root: Option<NormalizedPath>,
    last_scan: Option<ScanResult>,
}

impl ScannerCore {
    pub fn new(
        kind: ExtensionType,
        extension_root: impl Into<NormalizedPath>,
        config: &ScannerConfig,
    ) -> Self {
        Self {
            kind,
            extension_root: extension_root.into(),
            site_root: config.site_root.clone(),
            language_root: config.language_root.clone(),
            last_scan: None,
        }
    }

    pub fn kind(&self) -> ExtensionType {
        self.kind
    }

    pub fn extension_root(&self) -> &NormalizedPath {
        &self.extension_root
    }

    pub fn site_root(&self) -> &NormalizedPath {
        &self.site_root
    }

    pub fn language_root(&self) -> Option<&NormalizedPath> {
        self.language_root.as_ref()
    }

    /// Run `scan` and cache its result. The cache is cleared first, so a
    /// failed scan leaves the scanner unscanned.
    pub fn scan_with(
        &mut self,
        scan: impl FnOnce(&Self) -> Result<ScanResult>,
    ) -> Result<ScanResult> {
        self.last_scan = None;
        let result = scan(&*self)?;

        tracing::debug!(
            kind = %result.extension_type,
            extension = %result.extension,
            root = %self.extension_root,
            "scanned extension"
        );
        if result.is_empty() {
            tracing::debug!(extension = %result.extension, "scan found nothing to link");
        }

        self.last_scan = Some(result.clone());
        Ok(result)
    }

    pub fn scan_results(&self) -> Result<&ScanResult> {
        self.last_scan.as_ref().ok_or_else(|| Error::NotScanned {
            root: self.extension_root.to_native(),
        })
    }

    /// Locate and parse this extension's manifest.
    pub fn load_manifest(&self) -> Result<InstallerManifest> {
        Ok(link_manifest::find_manifest(&self.extension_root, self.kind.as_str())?)
    }

    /// Machine name from the first `<files>` child carrying the type attribute.
    pub fn extension_name(&self, manifest: &InstallerManifest) -> Result<String> {
        let attribute = self.kind.as_str();
        manifest
            .first_file_with(attribute)
            .and_then(|entry| entry.attribute(attribute))
            .map(|name| name.trim().to_string())
            .ok_or_else(|| Error::ExtensionNameNotFound {
                kind: self.kind,
                root: self.extension_root.to_native(),
            })
    }

    /// Fill `media_folder` and `media_destination` from the first `<media>`.
    pub fn apply_media(&self, manifest: &InstallerManifest, result: &mut ScanResult) {
        let media = manifest.media();
        if media.len() > 1 {
            tracing::warn!(
                root = %self.extension_root,
                count = media.len(),
                "manifest declares more than one <media> element, using the first"
            );
        }

        result.media_folder = None;
        result.media_destination = None;
        if let Some(block) = manifest.first_media() {
            result.media_folder = Some(self.extension_root.join(&block.folder));
            result.media_destination = block.destination.clone();
        }
    }

    /// Resolve every top-level `<languages>` block, dropping empty ones.
    pub fn language_sets(&self, manifest: &InstallerManifest) -> Vec<LanguageFiles> {
        let resolver = LanguageResolver::new(&self.extension_root, self.language_root.as_ref());
        manifest
            .languages()
            .iter()
            .map(|block| resolver.resolve(block))
            .filter(|files| {
                if files.is_empty() {
                    tracing::debug!(root = %files.root, "skipping <languages> block without files");
                }
                !files.is_empty()
            })
            .collect()
    }

    /// Language part of the map, identical for every extension type.
    ///
    /// Each language root maps to the scope's `language` directory, and
    /// each file keeps its relative path under it.
    pub fn map(&self) -> Result<MapResult> {
        let scan = self.scan_results()?;
        let mut result = MapResult::new();

        let slots = [
            (&scan.site_languages, ClientScope::Site),
            (&scan.admin_languages, ClientScope::Administrator),
        ];
        for (languages, scope) in slots {
            let Some(languages) = languages else {
                continue;
            };
            let destination = scope.base(&self.site_root).join("language");
            for file in &languages.files {
                result.add_file(languages.root.join(file), destination.join(file));
            }
            result.add_dir(languages.root.clone(), destination);
        }

        Ok(result)
    }

    /// Map the media folder to `media/{destination}` under the site root.
    ///
    /// Without a declared destination the folder's own name is used.
    pub fn map_media(&self, scan: &ScanResult, result: &mut MapResult) {
        let Some(folder) = &scan.media_folder else {
            return;
        };

        let destination = scan
            .media_destination
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .or_else(|| folder.file_name())
            .unwrap_or_default();
        result.add_dir(folder.clone(), self.site_root.join("media").join(destination));
    }
}
