use std::path::PathBuf;

use crate::result::ExtensionType;

/// Errors raised by scanners.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Manifest missing, not well-formed, or structurally invalid.
    #[error(transparent)]
    Manifest(#[from] link_manifest::Error),

    /// No `<files>` child carries the type-identifying attribute.
    #[error("cannot find the {kind} name in the XML manifest for {root}")]
    ExtensionNameNotFound { kind: ExtensionType, root: PathBuf },

    /// A root-element attribute the extension type requires is absent.
    #[error("{kind} manifest for {root} has no '{attribute}' attribute")]
    MissingAttribute {
        kind: ExtensionType,
        attribute: &'static str,
        root: PathBuf,
    },

    /// `map()` or `scan_results()` called before a successful `scan()`.
    #[error("extension in {root} has not been scanned")]
    NotScanned { root: PathBuf },

    /// The manifest declares a type without a scanner.
    #[error("unsupported extension type '{kind}' in {root}")]
    UnsupportedType { kind: String, root: PathBuf },

    #[error(transparent)]
    Fs(#[from] link_fs::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
