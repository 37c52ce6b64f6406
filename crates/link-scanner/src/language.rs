//! Language file resolution for `<languages>` blocks.

use link_fs::NormalizedPath;
use link_manifest::LanguagesBlock;

use crate::result::LanguageFiles;

/// Resolves the root and entries of `<languages>` blocks.
///
/// A caller-supplied override root takes precedence over the block's
/// `folder` attribute. Without either, files are relative to the extension
/// root.
#[derive(Debug, Clone, Copy)]
pub struct LanguageResolver<'a> {
    extension_root: &'a NormalizedPath,
    override_root: Option<&'a NormalizedPath>,
}

impl<'a> LanguageResolver<'a> {
    pub fn new(
        extension_root: &'a NormalizedPath,
        override_root: Option<&'a NormalizedPath>,
    ) -> Self {
        Self {
            extension_root,
            override_root,
        }
    }

    /// Resolve one block. An empty file list is a valid result.
    pub fn resolve(&self, block: &LanguagesBlock) -> LanguageFiles {
        let root = match (self.override_root, block.folder.as_deref()) {
            (Some(root), _) => root.clone(),
            (None, Some(folder)) => self.extension_root.join(folder),
            (None, None) => self.extension_root.clone(),
        };

        LanguageFiles {
            root,
            files: block.entries.iter().map(|e| e.path.clone()).collect(),
        }
    }
}
