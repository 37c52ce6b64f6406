//! [`TestExtension`] builder for scanner test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary extension source tree with helpers for test setup.
///
/// # Example
///
/// ```rust,no_run
/// use link_test_utils::{ManifestBuilder, TestExtension};
///
/// let ext = TestExtension::new();
/// ext.write_manifest("mod_example.xml", &ManifestBuilder::module("mod_example").build());
/// ext.write_file("tmpl/default.php", "<?php");
/// ```
pub struct TestExtension {
    temp_dir: TempDir,
}

impl Default for TestExtension {
    fn default() -> Self {
        Self::new()
    }
}

impl TestExtension {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the extension tree.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write an installer manifest at the root of the tree.
    pub fn write_manifest(&self, file_name: &str, xml: &str) -> PathBuf {
        self.write_file(file_name, xml)
    }

    /// Write `content` to `path` (relative to the root), creating parents.
    pub fn write_file(&self, path: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Create a directory (relative to the root).
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root().join(path);
        fs::create_dir_all(&full_path).unwrap();
        full_path
    }
}
