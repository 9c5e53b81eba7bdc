//! Tracing subscriber setup
//!
//! `RUST_LOG` wins when set; otherwise the configured level is used as the
//! filter directive.

use crate::config::models::logging::LoggingConfig;
use crate::utils::error::{ApiError, Result};
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, falling back to `config.level`
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| ApiError::Config(format!("Invalid log level '{}': {}", config.level, e))),
    }
}

/// Install the global subscriber
///
/// Fails if a subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;

    let installed = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .with_current_span(false)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .try_init()
    };

    installed.map_err(|e| ApiError::Internal(format!("Failed to install logger: {}", e)))
}
