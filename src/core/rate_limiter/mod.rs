//! Token bucket rate limiting
//!
//! One bucket per client key, refilled lazily on access. Idle buckets are
//! swept opportunistically from `check`, so no background task is needed.

mod bucket;
mod limiter;
mod types;


pub use limiter::RateLimiter;
pub use types::RateLimitResult;
