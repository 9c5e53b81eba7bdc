//! HTTP middleware implementations
//!
//! - Request logging and request ids
//! - Token bucket rate limiting

mod helpers;
mod rate_limit;
mod request_log;


pub use helpers::{
    client_ip, constant_time_eq, is_log_skipped, is_rate_limit_exempt, log_client_ip,
    new_request_id, rate_limit_key,
};
pub use rate_limit::{RateLimitMiddleware, RateLimitMiddlewareService};
pub use request_log::{RequestId, RequestLogMiddleware, RequestLogMiddlewareService};
