//! Read-only file access

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read the raw bytes of a file.
pub fn read_bytes(path: &NormalizedPath) -> Result<Vec<u8>> {
    let native_path = path.to_native();
    fs::read(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// List the regular files directly inside `dir` whose extension matches
/// `extension` (case-insensitive), sorted by file name.
pub fn list_files_with_extension(
    dir: &NormalizedPath,
    extension: &str,
) -> Result<Vec<NormalizedPath>> {
    let native_dir = dir.to_native();
    let entries = fs::read_dir(&native_dir).map_err(|e| Error::io(&native_dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native_dir, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if !file_type.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let matches = NormalizedPath::new(&name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if matches {
            names.push(name);
        }
    }

    names.sort();
    Ok(names.iter().map(|name| dir.join(name)).collect())
}
