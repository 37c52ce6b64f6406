//! Scan-phase behaviour shared by module and plugin scanners.

use link_fs::NormalizedPath;
use link_scanner::{
    Error, ExtensionType, ModuleScanner, PluginScanner, Scanner, ScannerConfig, detect_scanner,
    scanner_for,
};
use link_test_utils::{ManifestBuilder, TestExtension};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn config() -> ScannerConfig {
    ScannerConfig::new("/var/www/site")
}

fn extension_with(file_name: &str, manifest: &ManifestBuilder) -> TestExtension {
    let ext = TestExtension::new();
    ext.write_manifest(file_name, &manifest.build());
    ext
}

#[rstest]
#[case(ManifestBuilder::module("mod_example").client("site"), ExtensionType::Module)]
#[case(ManifestBuilder::plugin("myplugin", "system"), ExtensionType::Plugin)]
fn no_media_element_leaves_media_unset(
    #[case] manifest: ManifestBuilder,
    #[case] kind: ExtensionType,
) {
    let ext = extension_with("manifest.xml", &manifest);

    let scan = scanner_for(kind, ext.root(), &config()).scan().unwrap();

    assert_eq!(scan.media_folder, None);
    assert_eq!(scan.media_destination, None);
}

#[test]
fn first_media_element_wins() {
    let ext = extension_with(
        "mod_example.xml",
        &ManifestBuilder::module("mod_example")
            .client("site")
            .media("media", Some("mod_example"))
            .media("other", Some("ignored")),
    );

    let scan = ModuleScanner::new(ext.root(), &config()).scan().unwrap();

    assert_eq!(scan.media_folder, Some(NormalizedPath::new(ext.root()).join("media")));
    assert_eq!(scan.media_destination.as_deref(), Some("mod_example"));
}

#[rstest]
#[case(ManifestBuilder::module("mod_example").client("site"), ExtensionType::Module)]
#[case(ManifestBuilder::module("mod_example").client("administrator"), ExtensionType::Module)]
#[case(ManifestBuilder::plugin("myplugin", "content"), ExtensionType::Plugin)]
fn empty_languages_block_sets_no_language_fields(
    #[case] manifest: ManifestBuilder,
    #[case] kind: ExtensionType,
) {
    let ext = extension_with("manifest.xml", &manifest.languages(Some("language"), &[]));

    let scan = scanner_for(kind, ext.root(), &config()).scan().unwrap();

    assert_eq!(scan.site_languages, None);
    assert_eq!(scan.admin_languages, None);
}

#[test]
fn empty_block_does_not_clear_earlier_files() {
    let ext = extension_with(
        "mod_example.xml",
        &ManifestBuilder::module("mod_example")
            .client("site")
            .languages(Some("language"), &["en-GB/en-GB.mod_example.ini"])
            .languages(Some("empty"), &[]),
    );

    let scan = ModuleScanner::new(ext.root(), &config()).scan().unwrap();

    let site = scan.site_languages.unwrap();
    assert_eq!(site.root, NormalizedPath::new(ext.root()).join("language"));
    assert_eq!(site.files, vec!["en-GB/en-GB.mod_example.ini"]);
}

#[rstest]
#[case(Some("site"), true)]
#[case(Some("administrator"), false)]
#[case(None, false)]
fn module_client_scope_is_exclusive(#[case] client: Option<&str>, #[case] is_site: bool) {
    let mut manifest = ManifestBuilder::module("mod_example");
    if let Some(client) = client {
        manifest = manifest.client(client);
    }
    let ext = extension_with("mod_example.xml", &manifest);

    let scan = ModuleScanner::new(ext.root(), &config()).scan().unwrap();

    assert_eq!(scan.site_folder.is_some(), is_site);
    assert_eq!(scan.admin_folder.is_some(), !is_site);
}

#[rstest]
#[case(Some("site"))]
#[case(Some("administrator"))]
#[case(None)]
fn plugin_languages_always_use_admin_slot(#[case] client: Option<&str>) {
    let mut manifest = ManifestBuilder::plugin("myplugin", "content")
        .languages(Some("language"), &["en-GB/en-GB.plg_content_myplugin.ini"]);
    if let Some(client) = client {
        manifest = manifest.client(client);
    }
    let ext = extension_with("myplugin.xml", &manifest);

    let scan = PluginScanner::new(ext.root(), &config()).scan().unwrap();

    assert_eq!(scan.site_languages, None);
    let admin = scan.admin_languages.unwrap();
    assert_eq!(admin.files, vec!["en-GB/en-GB.plg_content_myplugin.ini"]);
}

#[test]
fn language_root_override_replaces_manifest_folder() {
    let ext = extension_with(
        "mod_example.xml",
        &ManifestBuilder::module("mod_example")
            .client("site")
            .languages(Some("language"), &["en-GB/en-GB.mod_example.ini"]),
    );
    let config = config().with_language_root("/translations/mod_example");

    let scan = ModuleScanner::new(ext.root(), &config).scan().unwrap();

    assert_eq!(
        scan.site_languages.unwrap().root.as_str(),
        "/translations/mod_example"
    );
}

#[test]
fn scanning_twice_yields_equal_results() {
    let ext = extension_with(
        "mod_example.xml",
        &ManifestBuilder::module("mod_example")
            .client("site")
            .media("media", Some("mod_example"))
            .languages(Some("language"), &["en-GB/a.ini", "en-GB/b.ini"]),
    );
    let mut scanner = ModuleScanner::new(ext.root(), &config());

    let first = scanner.scan().unwrap();
    let second = scanner.scan().unwrap();

    assert_eq!(first, second);
    assert_eq!(scanner.scan_results().unwrap(), &second);
}

#[rstest]
#[case(ExtensionType::Module, ManifestBuilder::module("unused").without_name())]
#[case(ExtensionType::Plugin, ManifestBuilder::plugin("unused", "system").without_name())]
fn missing_name_attribute_names_root_and_caches_nothing(
    #[case] kind: ExtensionType,
    #[case] manifest: ManifestBuilder,
) {
    let ext = extension_with("manifest.xml", &manifest.file("folder", "tmpl"));
    let mut scanner = scanner_for(kind, ext.root(), &config());

    let err = scanner.scan().unwrap_err();

    assert!(matches!(err, Error::ExtensionNameNotFound { .. }));
    assert!(err.to_string().contains(NormalizedPath::new(ext.root()).as_str()));
    assert!(matches!(scanner.scan_results(), Err(Error::NotScanned { .. })));
}

#[test]
fn wrong_type_attribute_in_files_is_not_found() {
    // A plugin manifest's <filename plugin=".."> does not name a module.
    let ext = TestExtension::new();
    ext.write_manifest(
        "manifest.xml",
        &ManifestBuilder::new("module", "plugin", "myplugin").build(),
    );

    let err = ModuleScanner::new(ext.root(), &config()).scan().unwrap_err();

    assert!(matches!(err, Error::ExtensionNameNotFound { kind: ExtensionType::Module, .. }));
}

#[test]
fn failed_rescan_clears_cached_result() {
    let ext = extension_with("mod_example.xml", &ManifestBuilder::module("mod_example"));
    let mut scanner = ModuleScanner::new(ext.root(), &config());
    scanner.scan().unwrap();

    ext.write_manifest("mod_example.xml", "<extension type=\"module\"><files>");
    assert!(matches!(scanner.scan(), Err(Error::Manifest(_))));

    assert!(matches!(scanner.map(), Err(Error::NotScanned { .. })));
}

#[test]
fn missing_manifest_is_a_manifest_error() {
    let ext = TestExtension::new();

    let err = PluginScanner::new(ext.root(), &config()).scan().unwrap_err();

    assert!(matches!(
        err,
        Error::Manifest(link_manifest::Error::ManifestNotFound { .. })
    ));
    assert!(err.to_string().contains(NormalizedPath::new(ext.root()).as_str()));
}

#[test]
fn detect_scanner_picks_declared_type() {
    let ext = extension_with("myplugin.xml", &ManifestBuilder::plugin("myplugin", "content"));

    let mut scanner = detect_scanner(ext.root(), &config()).unwrap();

    assert_eq!(scanner.extension_type(), ExtensionType::Plugin);
    assert_eq!(scanner.scan().unwrap().extension, "myplugin");
}

#[test]
fn detect_scanner_rejects_unsupported_types() {
    let ext = extension_with(
        "com_example.xml",
        &ManifestBuilder::new("component", "component", "com_example"),
    );

    let err = detect_scanner(ext.root(), &config()).err().unwrap();

    assert!(matches!(err, Error::UnsupportedType { ref kind, .. } if kind == "component"));
}
