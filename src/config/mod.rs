//! Configuration management
//!
//! Configuration is read from a YAML file, overlaid with environment
//! variables and validated once at startup.

pub mod loader;
pub mod models;

pub use models::*;

use crate::utils::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file without validating it
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ApiError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| ApiError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| ApiError::Config(format!("Server config error: {}", e)))?;
        self.rate_limit
            .validate()
            .map_err(|e| ApiError::Config(format!("Rate limit config error: {}", e)))?;
        self.github
            .validate()
            .map_err(|e| ApiError::Config(format!("GitHub config error: {}", e)))?;
        self.storage
            .database
            .validate()
            .map_err(|e| ApiError::Config(format!("Storage config error: {}", e)))?;

        self.security.warn_insecure();
        self.server.cors.warn_if_permissive();

        debug!("Configuration validation completed");
        Ok(())
    }
}
