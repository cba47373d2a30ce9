//! Installable-web-app manifest descriptor.
//!
//! Pure configuration with no runtime behavior; the storefront ships the
//! serialized default as `manifest.webmanifest`.

use serde::{Deserialize, Serialize};

/// An icon entry in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub icon_type: String,
    pub purpose: String,
}

impl ManifestIcon {
    fn new(src: &str, sizes: &str, icon_type: &str) -> Self {
        Self {
            src: src.to_string(),
            sizes: sizes.to_string(),
            icon_type: icon_type.to_string(),
            purpose: "any".to_string(),
        }
    }
}

/// A screenshot entry in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestScreenshot {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub image_type: String,
    pub form_factor: String,
    pub label: String,
}

/// The web-app manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebAppManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub scope: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub orientation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub screenshots: Vec<ManifestScreenshot>,
    pub icons: Vec<ManifestIcon>,
}

impl WebAppManifest {
    /// The storefront's descriptor.
    pub fn storefront_default() -> Self {
        Self {
            name: "VeloShop".to_string(),
            short_name: "VeloShop".to_string(),
            description: "A client-rendered storefront".to_string(),
            start_url: "/".to_string(),
            scope: ".".to_string(),
            display: "standalone".to_string(),
            background_color: "#ffffff".to_string(),
            theme_color: "#000000".to_string(),
            orientation: "portrait".to_string(),
            screenshots: vec![
                ManifestScreenshot {
                    src: "./img/storefront.png".to_string(),
                    sizes: "1662x955".to_string(),
                    image_type: "image/png".to_string(),
                    form_factor: "narrow".to_string(),
                    label: "VeloShop home screen on a mobile device".to_string(),
                },
                ManifestScreenshot {
                    src: "./img/storefront.png".to_string(),
                    sizes: "1662x955".to_string(),
                    image_type: "image/png".to_string(),
                    form_factor: "wide".to_string(),
                    label: "VeloShop home screen on a desktop device".to_string(),
                },
            ],
            icons: vec![
                ManifestIcon::new("./favicon.ico", "48x48", "image/x-icon"),
                ManifestIcon::new("./favicon-16x16.png", "16x16", "image/png"),
                ManifestIcon::new("./favicon-32x32.png", "32x32", "image/png"),
                ManifestIcon::new("./icon.png", "192x192", "image/png"),
            ],
        }
    }

    /// Serialize for shipping as a `.webmanifest` file.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
