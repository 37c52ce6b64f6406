//! Typed view of an extension installer manifest.
//!
//! # Example XML
//!
//! ```xml
//! <extension type="module" client="site" method="upgrade">
//!     <name>Example</name>
//!     <files>
//!         <filename module="mod_example">mod_example.php</filename>
//!         <folder>tmpl</folder>
//!     </files>
//!     <media folder="media" destination="mod_example">
//!         <folder>css</folder>
//!     </media>
//!     <languages folder="language">
//!         <language tag="en-GB">en-GB/en-GB.mod_example.ini</language>
//!     </languages>
//! </extension>
//! ```

use std::collections::BTreeMap;

use link_fs::NormalizedPath;
use roxmltree::{Document, Node, ParsingOptions};

use crate::ROOT_ELEMENT;
use crate::error::{Error, Result};

/// One element child of the `<files>` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Element name, usually `filename` or `folder`.
    pub element: String,
    /// Trimmed text content.
    pub value: String,
    pub attributes: BTreeMap<String, String>,
}

impl FileEntry {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// A `<media folder=".." destination="..">` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBlock {
    /// Source folder relative to the extension root. Empty when undeclared.
    pub folder: String,
    pub destination: Option<String>,
}

/// One `<language tag="..">relative/path.ini</language>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub tag: Option<String>,
    /// File path relative to the language root.
    pub path: String,
}

/// A top-level `<languages>` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagesBlock {
    /// Language root relative to the extension root, from the `folder` attribute.
    pub folder: Option<String>,
    /// Entries in declaration order.
    pub entries: Vec<LanguageEntry>,
}

/// Installer manifest parsed into the structures the scanners need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerManifest {
    path: NormalizedPath,
    attributes: BTreeMap<String, String>,
    files: Vec<FileEntry>,
    media: Vec<MediaBlock>,
    languages: Vec<LanguagesBlock>,
}

impl InstallerManifest {
    /// Parse manifest XML read from `path`.
    pub fn parse(path: &NormalizedPath, xml: &str) -> Result<Self> {
        let doc = parse_document(path, xml)?;
        Self::from_document(path, &doc)
    }

    /// Build the typed manifest from an already parsed document.
    pub(crate) fn from_document(path: &NormalizedPath, doc: &Document<'_>) -> Result<Self> {
        let root = doc.root_element();
        if !root.has_tag_name(ROOT_ELEMENT) {
            return Err(Error::InvalidManifest {
                path: path.to_native(),
                reason: format!(
                    "root element is <{}>, expected <{}>",
                    root.tag_name().name(),
                    ROOT_ELEMENT
                ),
            });
        }

        // The first <files> block in document order holds the main code tree.
        let files_node = root
            .descendants()
            .find(|n| n.has_tag_name("files"))
            .ok_or_else(|| Error::InvalidManifest {
                path: path.to_native(),
                reason: "missing <files> block".to_string(),
            })?;

        let files = files_node
            .children()
            .filter(Node::is_element)
            .map(|n| FileEntry {
                element: n.tag_name().name().to_string(),
                value: text_content(n),
                attributes: attributes_of(n),
            })
            .collect();

        let media = root
            .descendants()
            .filter(|n| n.has_tag_name("media"))
            .map(|n| MediaBlock {
                folder: n.attribute("folder").unwrap_or_default().to_string(),
                destination: n.attribute("destination").map(str::to_string),
            })
            .collect();

        let languages = root
            .children()
            .filter(|n| n.has_tag_name("languages"))
            .map(|n| LanguagesBlock {
                folder: n.attribute("folder").map(str::to_string),
                entries: n
                    .children()
                    .filter(Node::is_element)
                    .filter_map(|entry| {
                        let path = text_content(entry);
                        (!path.is_empty()).then(|| LanguageEntry {
                            tag: entry.attribute("tag").map(str::to_string),
                            path,
                        })
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            path: path.clone(),
            attributes: attributes_of(root),
            files,
            media,
            languages,
        })
    }

    /// Location of the manifest file.
    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    /// Attribute of the root `<extension>` element.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The declared extension type (`module`, `plugin`, ...).
    pub fn extension_type(&self) -> Option<&str> {
        self.attribute("type")
    }

    pub fn client(&self) -> Option<&str> {
        self.attribute("client")
    }

    pub fn group(&self) -> Option<&str> {
        self.attribute("group")
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// First `<files>` child carrying a non-empty `attribute`.
    pub fn first_file_with(&self, attribute: &str) -> Option<&FileEntry> {
        self.files
            .iter()
            .find(|f| f.attribute(attribute).is_some_and(|v| !v.trim().is_empty()))
    }

    /// Every `<media>` element in document order.
    pub fn media(&self) -> &[MediaBlock] {
        &self.media
    }

    /// The first `<media>` element; later ones are ignored by the scanners.
    pub fn first_media(&self) -> Option<&MediaBlock> {
        self.media.first()
    }

    /// The `/extension/languages` blocks in document order.
    pub fn languages(&self) -> &[LanguagesBlock] {
        &self.languages
    }
}

pub(crate) fn parse_document<'a>(path: &NormalizedPath, xml: &'a str) -> Result<Document<'a>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(xml, options).map_err(|source| Error::ManifestParse {
        path: path.to_native(),
        source,
    })
}

fn attributes_of(node: Node<'_, '_>) -> BTreeMap<String, String> {
    node.attributes()
        .map(|a| (a.name().to_string(), a.value().to_string()))
        .collect()
}

fn text_content(node: Node<'_, '_>) -> String {
    let text: String = node
        .descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect();
    text.trim().to_string()
}
