//! Environment variable overrides

use super::Config;
use crate::utils::error::{ApiError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

impl Config {
    /// Overlay values from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| env::var(key).ok())
    }

    /// Overlay values from an arbitrary lookup; blank values are ignored
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get("STATS_API_HOST") {
            self.server.host = host;
        }
        if let Some(port) = get("STATS_API_PORT") {
            self.server.port = parse("STATS_API_PORT", &port)?;
        }
        if let Some(origins) = get("CORS_ORIGINS") {
            self.server.cors.allowed_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }

        if let Some(limit) = get("API_RATE_LIMIT") {
            self.rate_limit.limit = parse("API_RATE_LIMIT", &limit)?;
        }
        if let Some(window) = get("API_RATE_WINDOW") {
            self.rate_limit.window_secs = parse("API_RATE_WINDOW", &window)?;
        }

        if let Some(username) = get("GITHUB_USERNAME") {
            self.github.username = username;
        }
        if let Some(token) = get("GITHUB_TOKEN") {
            self.github.token = token;
        }
        if let Some(url) = get("GITHUB_API_URL") {
            self.github.api_url = url;
        }

        if let Some(key) = get("COMMITS_API_KEY") {
            self.security.commits_api_key = key;
        }
        if let Some(salt) = get("VISITOR_HASH_SALT") {
            self.security.visitor_hash_salt = salt;
        }

        if let Some(dir) = get("DATA_DIR") {
            self.storage.data_dir = dir;
        }
        if let Some(url) = get("VISITORS_DATABASE_URL") {
            self.storage.database.url = url;
        }

        if let Some(level) = get("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = get("LOG_JSON") {
            self.logging.json = parse_bool(&json);
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ApiError::Config(format!("Invalid {}: {}", key, e)))
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
