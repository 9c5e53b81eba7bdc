//! Server configuration

use super::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of worker threads
    #[serde(default)]
    pub workers: Option<usize>,
    /// Name reported by `/health`
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            service_name: default_service_name(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Validate server configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Server port must be non-zero".to_string());
        }
        if self.host.trim().is_empty() {
            return Err("Server host cannot be empty".to_string());
        }
        if let Some(0) = self.workers {
            return Err("Worker count must be at least 1".to_string());
        }
        Ok(())
    }

    /// `host:port` string suitable for binding
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Enable CORS
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Allowed origins (empty means allow all)
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Max age for preflight requests
    #[serde(default = "default_cors_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec![],
            max_age: default_cors_max_age(),
        }
    }
}

impl CorsConfig {
    /// Whether any origin is accepted
    pub fn allows_all_origins(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }

    /// Log permissive settings
    pub fn warn_if_permissive(&self) {
        if self.enabled && self.allows_all_origins() {
            warn!("CORS allows all origins");
        }
    }
}

fn default_service_name() -> String {
    "portfolio-stats".to_string()
}

fn default_cors_max_age() -> usize {
    3600
}
