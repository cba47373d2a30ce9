//! Storefront configuration.

/// Static configuration for the storefront.
///
/// There is deliberately no environment or file source behind this; the
/// page consumes fixed configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Endpoint serving the full product catalog as a JSON array.
    pub catalog_url: String,
    /// Display name used in the header and document title.
    pub app_name: String,
}

impl StorefrontConfig {
    /// Create a configuration.
    pub fn new(catalog_url: impl Into<String>, app_name: impl Into<String>) -> Self {
        Self {
            catalog_url: catalog_url.into(),
            app_name: app_name.into(),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::new(
            "https://my-json-server.typicode.com/SebasRamz-Murillo/products-json/products/",
            "VeloShop",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert!(config.catalog_url.starts_with("https://"));
        assert_eq!(config.app_name, "VeloShop");
    }
}
