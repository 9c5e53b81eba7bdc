//! Error types for the stats gateway

use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, ApiError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Upstream service returned something unusable
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Missing or wrong credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limiting errors
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Closed duplex connection
    #[error("Connection closed: {0}")]
    ConnectionClosed(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
