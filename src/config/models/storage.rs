//! Storage configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `commits.json`
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Visitor database
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            database: DatabaseConfig::default(),
        }
    }
}

impl StorageConfig {
    /// Location of the commit cache file
    pub fn commits_cache_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("commits.json")
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }
        if self.max_connections == 0 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        Ok(())
    }
}
