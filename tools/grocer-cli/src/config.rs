//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use grocer_core::catalog::{StoreDirectory, DEFAULT_STORE, KNOWN_STORES};
use grocer_core::StoreName;
use grocer_views::PagingConfig;
use serde::{Deserialize, Serialize};

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "GROCER_API_URL";

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["grocer.toml", ".grocer.toml", "grocer.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrocerConfig {
    /// Upstream API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Page sizes and request bounds.
    #[serde(default)]
    pub paging: PagingConfig,

    /// Store list for the stores view.
    #[serde(default)]
    pub stores: StoresConfig,
}

impl GrocerConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config text, choosing the format from the file name.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Apply environment overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api.base_url = url.trim().to_string();
            }
        }
        self
    }

    /// Store directory for the stores view.
    pub fn directory(&self) -> StoreDirectory {
        let stores = self
            .stores
            .known
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| StoreName::new(s.trim()))
            .collect();
        let default = self.stores.default.as_deref().map(|d| StoreName::new(d.trim()));
        StoreDirectory::new(stores, default)
    }

    /// Check the configuration, returning `(errors, warnings)`.
    pub fn validate(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let url = self.api.base_url.trim();
        if url.is_empty() {
            errors.push("api.base_url is required".to_string());
        } else if !url.starts_with("http://") && !url.starts_with("https://") {
            errors.push(format!("api.base_url '{}' must be an http(s) URL", url));
        }

        if self.api.timeout_ms == 0 {
            errors.push("api.timeout_ms must be greater than 0".to_string());
        }

        let sizes = [
            ("paging.deals_page_size", self.paging.deals_page_size),
            ("paging.deals_limit", self.paging.deals_limit),
            ("paging.products_page_size", self.paging.products_page_size),
            ("paging.stores_page_size", self.paging.stores_page_size),
            ("paging.home_deals_limit", self.paging.home_deals_limit),
        ];
        for (key, value) in sizes {
            if value == 0 {
                errors.push(format!("{} must be greater than 0", key));
            }
        }

        if self.paging.deals_limit < self.paging.deals_page_size {
            warnings.push("paging.deals_limit is smaller than one deals page".to_string());
        }

        if let Some(default) = &self.stores.default {
            let default = default.trim();
            if !self.stores.known.iter().any(|s| s.trim() == default) {
                warnings.push(format!(
                    "stores.default '{}' is not in stores.known; the first store will be used",
                    default
                ));
            }
        }

        (errors, warnings)
    }
}

/// Upstream API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; call paths start with `/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_base_url() -> String {
    "http://localhost:8081".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    format!("grocer/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

/// Store list settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoresConfig {
    #[serde(default = "default_known_stores")]
    pub known: Vec<String>,

    #[serde(default = "default_store")]
    pub default: Option<String>,
}

fn default_known_stores() -> Vec<String> {
    KNOWN_STORES.iter().map(|s| s.to_string()).collect()
}

fn default_store() -> Option<String> {
    Some(DEFAULT_STORE.to_string())
}

impl Default for StoresConfig {
    fn default() -> Self {
        Self {
            known: default_known_stores(),
            default: default_store(),
        }
    }
}

/// Generate a default grocer.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Grocer configuration

[api]
base_url = "{base_url}"
timeout_ms = {timeout_ms}
# user_agent = "{user_agent}"

[paging]
deals_page_size = 15
deals_limit = 50
products_page_size = 20
stores_page_size = 20
home_deals_limit = 10

[stores]
known = ["Walmart", "Metro", "FreshCo", "Sobeys", "No Frills"]
default = "Walmart"
"#,
        base_url = default_base_url(),
        timeout_ms = default_timeout_ms(),
        user_agent = default_user_agent(),
    )
}
