//! Installer manifest reader.
//!
//! Locates the XML installer manifest inside an extension's source tree and
//! parses it into a typed [`InstallerManifest`]. Every scanner consumes the
//! typed form, so malformed input is rejected here, at a single boundary.

pub mod discovery;
mod encoding;
pub mod error;
pub mod manifest;

/// Name of the manifest root element.
pub const ROOT_ELEMENT: &str = "extension";

pub use discovery::{detect_extension_type, find_manifest};
pub use error::{Error, Result};
pub use manifest::{FileEntry, InstallerManifest, LanguageEntry, LanguagesBlock, MediaBlock};
