// Configuration module

mod models;

pub use models::*;

use crate::error::{GatewayError, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file
    /// 3. Defaults (lowest)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = config_path
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(Self::default_config_path);

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file; an explicitly requested file must exist
            .add_source(File::with_name(&path).required(config_path.is_some()))
            // Override with environment variables (prefix: AUTHGATE_,
            // nested keys joined with __, e.g. AUTHGATE_SERVER__PORT)
            .add_source(
                Environment::with_prefix("AUTHGATE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| GatewayError::Config(e.to_string()))
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".authgate")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}
