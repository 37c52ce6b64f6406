//! Filesystem helpers for the extension link mapper
//!
//! Provides slash-normalized paths, bounded text reads and
//! format-agnostic configuration loading.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
