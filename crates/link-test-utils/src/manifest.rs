//! [`ManifestBuilder`] for installer manifest XML.

/// Builds `<extension>` installer manifests for tests.
///
/// ```rust
/// use link_test_utils::ManifestBuilder;
///
/// let xml = ManifestBuilder::module("mod_example")
///     .client("site")
///     .media("media", Some("mod_example"))
///     .languages(Some("language"), &["en-GB/en-GB.mod_example.ini"])
///     .build();
/// assert!(xml.contains(r#"module="mod_example""#));
/// ```
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    kind: String,
    name_attribute: String,
    name: Option<String>,
    attributes: Vec<(String, String)>,
    files: Vec<(String, String)>,
    media: Vec<(String, Option<String>)>,
    languages: Vec<(Option<String>, Vec<String>)>,
}

impl ManifestBuilder {
    /// Manifest of type `kind` whose main file carries `name_attribute="name"`.
    pub fn new(kind: &str, name_attribute: &str, name: &str) -> Self {
        Self {
            kind: kind.to_string(),
            name_attribute: name_attribute.to_string(),
            name: Some(name.to_string()),
            attributes: Vec::new(),
            files: Vec::new(),
            media: Vec::new(),
            languages: Vec::new(),
        }
    }

    pub fn module(name: &str) -> Self {
        Self::new("module", "module", name)
    }

    pub fn plugin(name: &str, group: &str) -> Self {
        Self::new("plugin", "plugin", name).attribute("group", group)
    }

    pub fn client(self, client: &str) -> Self {
        self.attribute("client", client)
    }

    /// Add an attribute to the root element.
    pub fn attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    /// Add a plain `<files>` child such as `("folder", "tmpl")`.
    pub fn file(mut self, element: &str, value: &str) -> Self {
        self.files.push((element.to_string(), value.to_string()));
        self
    }

    /// Omit the name-carrying `<filename>` entry.
    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    pub fn media(mut self, folder: &str, destination: Option<&str>) -> Self {
        self.media
            .push((folder.to_string(), destination.map(str::to_string)));
        self
    }

    /// Add a top-level `<languages>` block.
    pub fn languages(mut self, folder: Option<&str>, files: &[&str]) -> Self {
        self.languages.push((
            folder.map(str::to_string),
            files.iter().map(|f| f.to_string()).collect(),
        ));
        self
    }

    pub fn build(&self) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        xml.push_str(&format!("<extension type=\"{}\"", self.kind));
        for (name, value) in &self.attributes {
            xml.push_str(&format!(" {name}=\"{value}\""));
        }
        xml.push_str(" method=\"upgrade\">\n");
        xml.push_str("    <name>Test extension</name>\n");

        xml.push_str("    <files>\n");
        if let Some(name) = &self.name {
            xml.push_str(&format!(
                "        <filename {}=\"{}\">{}.php</filename>\n",
                self.name_attribute, name, name
            ));
        }
        for (element, value) in &self.files {
            xml.push_str(&format!("        <{element}>{value}</{element}>\n"));
        }
        xml.push_str("    </files>\n");

        for (folder, destination) in &self.media {
            xml.push_str(&format!("    <media folder=\"{folder}\""));
            if let Some(destination) = destination {
                xml.push_str(&format!(" destination=\"{destination}\""));
            }
            xml.push_str(">\n        <folder>css</folder>\n    </media>\n");
        }

        for (folder, files) in &self.languages {
            match folder {
                Some(folder) => xml.push_str(&format!("    <languages folder=\"{folder}\">\n")),
                None => xml.push_str("    <languages>\n"),
            }
            for file in files {
                let tag = file.split('/').next().unwrap_or("en-GB");
                xml.push_str(&format!(
                    "        <language tag=\"{tag}\">{file}</language>\n"
                ));
            }
            xml.push_str("    </languages>\n");
        }

        xml.push_str("</extension>\n");
        xml
    }
}
