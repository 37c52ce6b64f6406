//! Manifest discovery inside an extension source tree.
//!
//! The manifest is the first `*.xml` file directly under the extension root
//! (by file name) whose root element is `<extension>` with the requested
//! `type`. Other XML files (update servers, forms, config) are skipped, as
//! are files that cannot be decoded in their declared encoding.

use link_fs::{NormalizedPath, io};
use roxmltree::Node;

use crate::ROOT_ELEMENT;
use crate::encoding::decode_xml;
use crate::error::{Error, Result};
use crate::manifest::{InstallerManifest, parse_document};

/// Locate and parse the `<extension type="{kind}">` manifest under `root`.
pub fn find_manifest(root: &NormalizedPath, kind: &str) -> Result<InstallerManifest> {
    match scan_candidates(root, Some(kind))? {
        Some(manifest) => Ok(manifest),
        None => Err(not_found(root, kind)),
    }
}

/// Return the `type` declared by the first extension manifest under `root`.
pub fn detect_extension_type(root: &NormalizedPath) -> Result<String> {
    let manifest = scan_candidates(root, None)?.ok_or_else(|| not_found(root, "extension"))?;
    manifest
        .extension_type()
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidManifest {
            path: manifest.path().to_native(),
            reason: "root element has no type attribute".to_string(),
        })
}

fn scan_candidates(
    root: &NormalizedPath,
    kind: Option<&str>,
) -> Result<Option<InstallerManifest>> {
    if !root.is_dir() {
        return Ok(None);
    }

    for candidate in io::list_files_with_extension(root, "xml")? {
        let bytes = io::read_bytes(&candidate)?;
        let Some(xml) = decode_xml(&bytes) else {
            // Only an undecodable file that still looks like the wanted
            // manifest is fatal.
            let lossy = String::from_utf8_lossy(&bytes);
            let looks_like_manifest = parse_document(&candidate, &lossy)
                .is_ok_and(|doc| is_manifest(&candidate, doc.root_element(), kind));
            if looks_like_manifest {
                return Err(Error::InvalidManifest {
                    path: candidate.to_native(),
                    reason: "content is not valid in its declared encoding".to_string(),
                });
            }
            tracing::debug!(file = %candidate, "skipping XML file that cannot be decoded");
            continue;
        };

        let doc = parse_document(&candidate, &xml)?;
        if !is_manifest(&candidate, doc.root_element(), kind) {
            continue;
        }

        tracing::debug!(file = %candidate, "using installer manifest");
        return InstallerManifest::from_document(&candidate, &doc).map(Some);
    }

    Ok(None)
}

/// Whether `element` is an `<extension>` root of the wanted type, or of any
/// declared type when `kind` is `None`.
fn is_manifest(candidate: &NormalizedPath, element: Node<'_, '_>, kind: Option<&str>) -> bool {
    if !element.has_tag_name(ROOT_ELEMENT) {
        tracing::debug!(
            file = %candidate,
            root = element.tag_name().name(),
            "skipping non-manifest XML"
        );
        return false;
    }

    let declared = element.attribute("type");
    match kind {
        Some(kind) if declared != Some(kind) => {
            tracing::debug!(
                file = %candidate,
                ?declared,
                wanted = kind,
                "skipping manifest of another type"
            );
            false
        }
        Some(_) => true,
        None => declared.is_some(),
    }
}

fn not_found(root: &NormalizedPath, kind: &str) -> Error {
    Error::ManifestNotFound {
        kind: kind.to_string(),
        root: root.to_native(),
        expected: root.join("*.xml").to_native(),
    }
}
