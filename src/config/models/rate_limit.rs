//! Rate limiting configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Token bucket settings applied to every rate-limited route.
///
/// A client gets `limit` requests per `window_secs`, refilled continuously.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Bucket capacity
    #[serde(default = "default_rate_limit")]
    pub limit: u32,
    /// Seconds needed to refill an empty bucket
    #[serde(default = "default_rate_window")]
    pub window_secs: u64,
    /// Minimum spacing between idle-bucket sweeps
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_secs: u64,
    /// Buckets untouched for this long are dropped on the next sweep
    #[serde(default = "default_idle_ttl")]
    pub idle_ttl_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            limit: default_rate_limit(),
            window_secs: default_rate_window(),
            cleanup_interval_secs: default_cleanup_interval(),
            idle_ttl_secs: default_idle_ttl(),
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.limit < 1 {
            return Err("Rate limit must be at least 1 request".to_string());
        }
        if self.window_secs < 1 {
            return Err("Rate limit window must be at least 1 second".to_string());
        }
        Ok(())
    }

    /// Tokens added per second
    pub fn refill_rate(&self) -> f64 {
        self.limit as f64 / self.window_secs as f64
    }
}
