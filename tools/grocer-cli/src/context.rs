//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use grocer_data::{FetchClient, GroceryApi, ReqwestTransport};

use crate::config::{GrocerConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration, with environment overrides applied.
    pub config: GrocerConfig,
    /// Where the configuration came from, if a file was used.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (GrocerConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (GrocerConfig::default(), None),
            }
        };

        Ok(Self {
            config: config.with_env_overrides(),
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(GrocerConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match GrocerConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => {
                            tracing::warn!(path = %config_path.display(), error = %e, "skipping unreadable config")
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// API client built from the `[api]` section.
    pub fn api(&self) -> Result<GroceryApi> {
        let transport = ReqwestTransport::new(self.config.api.timeout(), &self.config.api.user_agent)
            .context("Failed to build HTTP client")?;
        tracing::debug!(base_url = %self.config.api.base_url, "using comparison API");
        let client = FetchClient::new(transport).with_base_url(self.config.api.base_url.clone());
        Ok(GroceryApi::new(client))
    }
}
