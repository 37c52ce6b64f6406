use std::path::PathBuf;

/// Errors raised while locating or parsing an installer manifest.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No `<extension>` manifest of the requested type exists under the root.
    #[error("no {kind} manifest found in {root} (expected {expected})")]
    ManifestNotFound {
        kind: String,
        root: PathBuf,
        expected: PathBuf,
    },

    /// The manifest file is not well-formed XML.
    #[error("failed to parse manifest {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// The manifest is well-formed but structurally unusable.
    #[error("invalid manifest {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },

    #[error(transparent)]
    Fs(#[from] link_fs::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
