//! Rate limiter types and data structures

use std::time::Instant;

/// Outcome of a single `check`
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitResult {
    /// Whether the request is allowed
    pub allowed: bool,
    /// Seconds until one token is available (only set when not allowed)
    pub retry_after_secs: Option<f64>,
    /// Whole tokens left after this decision
    pub remaining: u32,
    /// Bucket capacity
    pub limit: u32,
}

impl RateLimitResult {
    /// `Retry-After` header value: whole seconds, rounded up, at least 1
    pub fn retry_after_header(&self) -> u64 {
        self.retry_after_secs
            .map(|secs| (secs.ceil() as u64).max(1))
            .unwrap_or(1)
    }
}

/// Per-key token state
#[derive(Debug, Clone)]
pub(super) struct TokenBucket {
    pub(super) tokens: f64,
    pub(super) last_refill: Instant,
}
