//! Configuration data models
//!
//! Every section deserializes with defaults, so a partial (or empty) YAML file
//! is a valid configuration.

pub mod github;
pub mod logging;
pub mod rate_limit;
pub mod security;
pub mod server;
pub mod storage;

pub use github::*;
pub use logging::*;
pub use rate_limit::*;
pub use security::*;
pub use server::*;
pub use storage::*;

/// Default bind address
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8085
}

pub fn default_true() -> bool {
    true
}

pub fn default_rate_limit() -> u32 {
    60
}

pub fn default_rate_window() -> u64 {
    60
}

pub fn default_cleanup_interval() -> u64 {
    300 // 5 minutes
}

pub fn default_idle_ttl() -> u64 {
    600 // 10 minutes
}

pub fn default_github_api_url() -> String {
    "https://api.github.com/graphql".to_string()
}

pub fn default_poll_interval() -> u64 {
    3600 // 1 hour
}

pub fn default_request_timeout() -> u64 {
    10
}

pub fn default_visitor_salt() -> String {
    "portfolio-visitors".to_string()
}

pub fn default_data_dir() -> String {
    "data".to_string()
}

pub fn default_database_url() -> String {
    "sqlite://data/visitors.db?mode=rwc".to_string()
}

pub fn default_max_connections() -> u32 {
    5
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_log_level() -> String {
    "info".to_string()
}
