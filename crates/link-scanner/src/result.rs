//! Scan and map results shared by every scanner.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use link_fs::NormalizedPath;
use serde::{Deserialize, Serialize};

/// Extension types with a scanner implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionType {
    Module,
    Plugin,
}

impl ExtensionType {
    /// Value of the manifest's `type` attribute, also the name of the
    /// `<files>` attribute carrying the extension's machine name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Plugin => "plugin",
        }
    }
}

impl fmt::Display for ExtensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtensionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "module" => Ok(Self::Module),
            "plugin" => Ok(Self::Plugin),
            other => Err(format!("unsupported extension type '{other}'")),
        }
    }
}

/// Front-end or back-end placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientScope {
    Site,
    Administrator,
}

impl ClientScope {
    /// Scope selected by a manifest `client` attribute. Anything other than
    /// `site` (including a missing attribute) is the back-end.
    pub fn from_client(client: Option<&str>) -> Self {
        match client {
            Some(c) if c.trim().eq_ignore_ascii_case("site") => Self::Site,
            _ => Self::Administrator,
        }
    }

    /// Root of this scope inside an installation.
    pub fn base(&self, site_root: &NormalizedPath) -> NormalizedPath {
        match self {
            Self::Site => site_root.clone(),
            Self::Administrator => site_root.join("administrator"),
        }
    }
}

/// Language files resolved from one `<languages>` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageFiles {
    /// Directory the file paths are relative to.
    pub root: NormalizedPath,
    /// Relative file paths in manifest declaration order.
    pub files: Vec<String>,
}

impl LanguageFiles {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Everything discovered about one extension by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub extension_type: ExtensionType,
    /// Declared machine name, never empty.
    pub extension: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_folder: Option<NormalizedPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_folder: Option<NormalizedPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_folder: Option<NormalizedPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_languages: Option<LanguageFiles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_languages: Option<LanguageFiles>,
    /// Plugin group, the category folder under `plugins/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_folder: Option<String>,
}

impl ScanResult {
    pub fn new(extension_type: ExtensionType, extension: impl Into<String>) -> Self {
        Self {
            extension_type,
            extension: extension.into(),
            site_folder: None,
            admin_folder: None,
            media_folder: None,
            media_destination: None,
            site_languages: None,
            admin_languages: None,
            plugin_folder: None,
        }
    }

    /// True when the scan found nothing to link.
    pub fn is_empty(&self) -> bool {
        self.site_folder.is_none()
            && self.admin_folder.is_none()
            && self.media_folder.is_none()
            && self.site_languages.is_none()
            && self.admin_languages.is_none()
    }
}

/// Source to destination instructions for the linker.
///
/// Keys are source paths. Adding an existing key replaces its destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapResult {
    pub dirs: BTreeMap<NormalizedPath, NormalizedPath>,
    pub files: BTreeMap<NormalizedPath, NormalizedPath>,
}

impl MapResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a source directory, returning the destination it replaced.
    pub fn add_dir(
        &mut self,
        source: NormalizedPath,
        destination: NormalizedPath,
    ) -> Option<NormalizedPath> {
        self.dirs.insert(source, destination)
    }

    /// Map a source file, returning the destination it replaced.
    pub fn add_file(
        &mut self,
        source: NormalizedPath,
        destination: NormalizedPath,
    ) -> Option<NormalizedPath> {
        self.files.insert(source, destination)
    }

    /// Merge directory entries; later entries win on key collisions.
    pub fn merge_dirs(
        &mut self,
        dirs: impl IntoIterator<Item = (NormalizedPath, NormalizedPath)>,
    ) {
        self.dirs.extend(dirs);
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }

    /// Total number of link instructions.
    pub fn len(&self) -> usize {
        self.dirs.len() + self.files.len()
    }
}
