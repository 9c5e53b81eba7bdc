//! Core rate limiter implementation

use super::types::{RateLimitResult, TokenBucket};
use crate::config::models::rate_limit::RateLimitConfig;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

struct LimiterState {
    buckets: HashMap<String, TokenBucket>,
    last_sweep: Instant,
}

/// Keyed token bucket limiter
pub struct RateLimiter {
    enabled: bool,
    capacity: u32,
    rate: f64,
    cleanup_interval: Duration,
    idle_ttl: Duration,
    state: Mutex<LimiterState>,
}

impl RateLimiter {
    /// Create a limiter from configuration
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            enabled: config.enabled,
            capacity: config.limit.max(1),
            rate: config.refill_rate(),
            cleanup_interval: Duration::from_secs(config.cleanup_interval_secs),
            idle_ttl: Duration::from_secs(config.idle_ttl_secs),
            state: Mutex::new(LimiterState {
                buckets: HashMap::new(),
                last_sweep: Instant::now(),
            }),
        }
    }

    /// Bucket capacity
    pub fn limit(&self) -> u32 {
        self.capacity
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Consume one token for `key` if available
    pub fn check(&self, key: &str) -> RateLimitResult {
        self.check_at(key, Instant::now())
    }

    /// Same as `check`, evaluated at an explicit instant
    pub fn check_at(&self, key: &str, now: Instant) -> RateLimitResult {
        if !self.enabled {
            return RateLimitResult {
                allowed: true,
                retry_after_secs: None,
                remaining: self.capacity,
                limit: self.capacity,
            };
        }

        let capacity = self.capacity as f64;
        let mut state = self.state.lock();

        if now.saturating_duration_since(state.last_sweep) >= self.cleanup_interval {
            Self::sweep(&mut state, now, self.idle_ttl);
        }

        let bucket = state
            .buckets
            .entry(key.to_string())
            .or_insert_with(|| TokenBucket::full(capacity, now));

        bucket.refill(capacity, self.rate, now);
        let allowed = bucket.try_consume();

        let retry_after_secs = if allowed {
            None
        } else {
            debug!("Rate limit exceeded for {}", key);
            Some(bucket.retry_after(self.rate))
        };

        RateLimitResult {
            allowed,
            retry_after_secs,
            remaining: bucket.remaining(),
            limit: self.capacity,
        }
    }

    /// Drop buckets idle longer than the configured TTL
    pub fn cleanup_at(&self, now: Instant) -> usize {
        let mut state = self.state.lock();
        Self::sweep(&mut state, now, self.idle_ttl)
    }

    fn sweep(state: &mut LimiterState, now: Instant, idle_ttl: Duration) -> usize {
        let before = state.buckets.len();
        state
            .buckets
            .retain(|_, bucket| now.saturating_duration_since(bucket.last_refill) <= idle_ttl);
        state.last_sweep = now;

        let removed = before - state.buckets.len();
        if removed > 0 {
            debug!("Evicted {} idle rate limit buckets", removed);
        }
        removed
    }

    /// Number of tracked keys
    pub fn len(&self) -> usize {
        self.state.lock().buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
