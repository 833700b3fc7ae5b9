use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Base URL of the REST backend, without the `/api` suffix
    pub api_base_url: String,

    /// Symbol printed before prices
    pub currency_symbol: String,

    /// Alert shown once a product has been deleted
    pub deletion_notice: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            currency_symbol: "₹".to_string(),
            deletion_notice: "Product successfully deleted.".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Names a TOML file to load instead of the defaults.
    pub const PATH_ENV: &'static str = "STOREFRONT_CONFIG";

    /// Overrides `api_base_url` after the file has been read.
    pub const API_URL_ENV: &'static str = "STOREFRONT_API_URL";

    /// Load configuration from the environment.
    ///
    /// In the browser build there is no process environment, so this falls
    /// through to the defaults.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(Self::PATH_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(url) = std::env::var(Self::API_URL_ENV) {
            debug!(url = %url, "API base URL overridden from environment");
            config.api_base_url = url;
        }

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        info!(path = %path.display(), "Loaded storefront configuration");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.api_base_url.trim().is_empty() {
            anyhow::bail!("api_base_url must not be empty");
        }
        Ok(config)
    }

    /// Format a price with the configured currency symbol, e.g. `₹ 499.00`.
    pub fn format_price(&self, price: f64) -> String {
        format!("{} {:.2}", self.currency_symbol, price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StorefrontConfig::from_toml(r#"api_base_url = "https://shop.example.com""#)
            .unwrap();

        assert_eq!(config.api_base_url, "https://shop.example.com");
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.deletion_notice, "Product successfully deleted.");
    }

    #[test]
    fn test_empty_api_url_is_rejected() {
        assert!(StorefrontConfig::from_toml(r#"api_base_url = " ""#).is_err());
        assert!(StorefrontConfig::from_toml("currency_symbol = 5").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "currency_symbol = \"$\"").unwrap();

        let config = StorefrontConfig::from_file(file.path()).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.format_price(12.5), "$ 12.50");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let error = StorefrontConfig::from_file("/nonexistent/storefront.toml").unwrap_err();
        assert!(error.to_string().contains("/nonexistent/storefront.toml"));
    }

    #[test]
    fn test_format_price() {
        let config = StorefrontConfig::default();
        assert_eq!(config.format_price(499.0), "₹ 499.00");
    }
}
