//! End-to-end test of the build-by-reference flow
//!
//! A developer checkout holds several extensions side by side. Each is
//! detected, scanned and mapped against one site root, and the maps are
//! merged into the set of links an external linker would create.

use std::fs;

use link_fs::NormalizedPath;
use link_scanner::{ExtensionType, MapResult, Scanner, ScannerConfig, detect_scanner};
use link_test_utils::{ManifestBuilder, TestExtension};
use pretty_assertions::assert_eq;

const SITE: &str = "/var/www/site";

/// Lay out a checkout with one site module, one admin module and one plugin.
fn setup_checkout() -> TestExtension {
    let checkout = TestExtension::new();

    checkout.write_file(
        "modules/site/mod_latest/mod_latest.xml",
        &ManifestBuilder::module("mod_latest")
            .client("site")
            .file("folder", "tmpl")
            .media("media", Some("mod_latest"))
            .languages(Some("language"), &["en-GB/en-GB.mod_latest.ini"])
            .build(),
    );
    checkout.create_dir("modules/site/mod_latest/tmpl");
    checkout.create_dir("modules/site/mod_latest/media/css");

    checkout.write_file(
        "modules/admin/mod_stats/mod_stats.xml",
        &ManifestBuilder::module("mod_stats")
            .client("administrator")
            .languages(
                Some("language"),
                &["en-GB/en-GB.mod_stats.ini", "en-GB/en-GB.mod_stats.sys.ini"],
            )
            .build(),
    );

    checkout.write_file(
        "plugins/system/shield/shield.xml",
        &ManifestBuilder::plugin("shield", "system")
            .languages(None, &["en-GB/en-GB.plg_system_shield.ini"])
            .build(),
    );
    // Unrelated XML next to the manifest must not confuse discovery.
    checkout.write_file("plugins/system/shield/forms.xml", "<form><fieldset/></form>");

    checkout
}

fn map_all(checkout: &TestExtension, relative_roots: &[&str]) -> (Vec<ExtensionType>, MapResult) {
    let config = ScannerConfig::new(SITE);
    let mut kinds = Vec::new();
    let mut merged = MapResult::new();

    for relative in relative_roots {
        let mut scanner = detect_scanner(checkout.root().join(relative), &config).unwrap();
        scanner.scan().unwrap();
        let map = scanner.map().unwrap();

        kinds.push(scanner.extension_type());
        for (src, dst) in map.dirs {
            assert!(merged.add_dir(src, dst).is_none(), "directory linked twice");
        }
        for (src, dst) in map.files {
            assert!(merged.add_file(src, dst).is_none(), "file linked twice");
        }
    }

    (kinds, merged)
}

#[test]
fn test_checkout_maps_every_extension() {
    let checkout = setup_checkout();
    let root = NormalizedPath::new(checkout.root());

    let (kinds, merged) = map_all(
        &checkout,
        &[
            "modules/site/mod_latest",
            "modules/admin/mod_stats",
            "plugins/system/shield",
        ],
    );

    assert_eq!(
        kinds,
        vec![ExtensionType::Module, ExtensionType::Module, ExtensionType::Plugin]
    );

    let dir = |src: &str| merged.dirs.get(&root.join(src)).map(|d| d.as_str().to_string());
    assert_eq!(dir("modules/site/mod_latest"), Some(format!("{SITE}/modules/mod_latest")));
    assert_eq!(dir("modules/site/mod_latest/media"), Some(format!("{SITE}/media/mod_latest")));
    assert_eq!(dir("modules/site/mod_latest/language"), Some(format!("{SITE}/language")));
    assert_eq!(
        dir("modules/admin/mod_stats"),
        Some(format!("{SITE}/administrator/modules/mod_stats"))
    );
    assert_eq!(
        dir("modules/admin/mod_stats/language"),
        Some(format!("{SITE}/administrator/language"))
    );
    // The plugin's language root is its source root; the main tree entry wins.
    assert_eq!(dir("plugins/system/shield"), Some(format!("{SITE}/plugins/system/shield")));

    assert_eq!(merged.files.len(), 4);
    assert_eq!(
        merged
            .files
            .get(&root.join("plugins/system/shield/en-GB/en-GB.plg_system_shield.ini"))
            .map(NormalizedPath::as_str),
        Some("/var/www/site/administrator/language/en-GB/en-GB.plg_system_shield.ini")
    );
}

#[test]
fn test_map_serializes_for_linker() {
    let checkout = setup_checkout();

    let (_, merged) = map_all(&checkout, &["modules/site/mod_latest"]);
    let json = serde_json::to_string(&merged).unwrap();
    let back: MapResult = serde_json::from_str(&json).unwrap();

    assert_eq!(back, merged);
}

#[test]
fn test_scanner_never_writes_to_extension_tree() {
    let checkout = setup_checkout();
    let plugin_root = checkout.root().join("plugins/system/shield");
    let list = || {
        let mut names: Vec<_> = fs::read_dir(&plugin_root)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        names.sort();
        names
    };
    let before = list();

    map_all(&checkout, &["plugins/system/shield"]);

    assert_eq!(before, list());
}
