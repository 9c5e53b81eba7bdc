use super::types::TokenBucket;
use std::time::Instant;

impl TokenBucket {
    /// New buckets start full
    pub(super) fn full(capacity: f64, now: Instant) -> Self {
        Self {
            tokens: capacity,
            last_refill: now,
        }
    }

    /// Add `elapsed * rate` tokens, capped at capacity
    pub(super) fn refill(&mut self, capacity: f64, rate: f64, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_refill).as_secs_f64();
        self.tokens = (self.tokens + elapsed * rate).min(capacity);
        self.last_refill = now;
    }

    /// Take one token if available
    pub(super) fn try_consume(&mut self) -> bool {
        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    /// Seconds until a whole token is available; zero when one already is
    pub(super) fn retry_after(&self, rate: f64) -> f64 {
        if self.tokens >= 1.0 {
            0.0
        } else {
            (1.0 - self.tokens) / rate
        }
    }

    pub(super) fn remaining(&self) -> u32 {
        self.tokens.max(0.0).floor() as u32
    }
}
