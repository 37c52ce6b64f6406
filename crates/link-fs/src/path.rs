//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A path normalized to use forward slashes internally.
///
/// Source and destination paths in scan and map results are stored in this
/// form so the same extension tree produces identical maps on every
/// platform. Conversion to a platform-native path happens only at I/O
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes, no trailing slash
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes and drops a trailing slash
    /// (the filesystem root `/` is kept as is).
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::from_raw(&path.as_ref().to_string_lossy())
    }

    fn from_raw(raw: &str) -> Self {
        let normalized = raw.replace('\\', "/");
        let trimmed = normalized.trim_end_matches('/');
        let inner = if trimmed.is_empty() && normalized.starts_with('/') {
            "/".to_string()
        } else {
            trimmed.to_string()
        };
        Self { inner }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a relative segment.
    ///
    /// Leading and trailing slashes on the segment are ignored, so joining
    /// `"/media/"` behaves like joining `"media"`. An empty segment returns
    /// the path unchanged.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        let segment_trimmed = segment_normalized.trim_matches('/');
        if segment_trimmed.is_empty() {
            return self.clone();
        }

        let joined = if self.inner.is_empty() {
            segment_trimmed.to_string()
        } else if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_trimmed)
        } else {
            format!("{}/{}", self.inner, segment_trimmed)
        };
        Self { inner: joined }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        match self.inner.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: self.inner[..idx].to_string(),
            }),
            Some(0) if self.inner.len() > 1 => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        self.inner.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::from_raw(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::from_raw(&s)
    }
}

impl From<NormalizedPath> for String {
    fn from(p: NormalizedPath) -> Self {
        p.inner
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
