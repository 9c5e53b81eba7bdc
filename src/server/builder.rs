//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{ApiError, Result};
use std::path::Path;
use tracing::{info, warn};

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| ApiError::Config("Configuration is required".to_string()))?;
        config.validate()?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from `config_path` plus the environment
///
/// A missing or unparsable file falls back to defaults; invalid values are fatal.
pub async fn load_config<P: AsRef<Path>>(config_path: P) -> Result<Config> {
    let config_path = config_path.as_ref();
    let mut config = match Config::from_file(config_path).await {
        Ok(config) => {
            info!("Configuration file loaded successfully");
            config
        }
        Err(e) => {
            warn!("Configuration file loading failed, using defaults: {}", e);
            Config::default()
        }
    };

    config.apply_env()?;
    config.validate()?;
    Ok(config)
}

/// Build and run the server from a loaded configuration
pub async fn run_server(config: Config) -> Result<()> {
    let server = ServerBuilder::new().with_config(config).build().await?;

    info!("Server starting at: http://{}", server.config().address());
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /stats - Portfolio stats");
    info!("   POST /commits/refresh - Refresh GitHub commits");
    info!("   GET  /avatar - Developer avatar");
    info!("   GET  /visitors - Visitor counts");
    info!("   POST /visitors/track - Record a visit");
    info!("   GET  /ws/stats - Live stats stream");

    server.start().await
}
