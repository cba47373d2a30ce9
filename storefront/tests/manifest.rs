//! Pins the shipped manifest file to the generated descriptor.

use velo_seo::WebAppManifest;

#[test]
fn shipped_manifest_matches_generated() {
    let shipped = include_str!("../public/manifest.webmanifest");
    let generated = WebAppManifest::storefront_default().to_json_pretty();

    let shipped_value: serde_json::Value = serde_json::from_str(shipped).unwrap();
    let generated_value: serde_json::Value = serde_json::from_str(&generated).unwrap();
    assert_eq!(shipped_value, generated_value);
}

#[test]
fn shipped_manifest_is_installable() {
    let manifest: WebAppManifest =
        serde_json::from_str(include_str!("../public/manifest.webmanifest")).unwrap();
    assert_eq!(manifest.display, "standalone");
    assert!(!manifest.icons.is_empty());
}
