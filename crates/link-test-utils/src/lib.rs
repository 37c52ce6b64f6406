//! Shared test utilities for the link mapper workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`extension`]: [`TestExtension`], a throwaway extension source tree
//! - [`manifest`]: [`ManifestBuilder`], installer manifest XML generation

pub mod extension;
pub mod manifest;

pub use extension::TestExtension;
pub use manifest::ManifestBuilder;
