//! Helper functions for middleware

use actix_web::HttpRequest;
use uuid::Uuid;

/// Paths never subject to rate limiting
const RATE_LIMIT_EXEMPT: &[&str] = &["/health"];

/// Paths that are not logged at all
const LOG_SKIP_PATHS: &[&str] = &["/health"];

/// Crawler noise
const LOG_SKIP_PREFIXES: &[&str] = &[
    "/favicon.ico",
    "/robots.txt",
    "/ads.txt",
    "/sellers.json",
    "/app-ads.txt",
    "/.well-known",
];

/// Client address: first `X-Forwarded-For` entry, then the peer
///
/// Used for rate limit keys and visitor identity.
pub fn client_ip(req: &HttpRequest) -> String {
    forwarded_for(req).unwrap_or_else(|| peer_ip(req))
}

/// Client address for log lines; also honors `X-Real-IP`
pub fn log_client_ip(req: &HttpRequest) -> String {
    forwarded_for(req)
        .or_else(|| {
            req.headers()
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|ip| !ip.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| peer_ip(req))
}

fn forwarded_for(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
}

fn peer_ip(req: &HttpRequest) -> String {
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Bucket key for a client on a route
pub fn rate_limit_key(ip: &str, path: &str) -> String {
    format!("ip:{}:{}", ip, path)
}

pub fn is_rate_limit_exempt(path: &str) -> bool {
    RATE_LIMIT_EXEMPT.contains(&path)
}

pub fn is_log_skipped(path: &str) -> bool {
    LOG_SKIP_PATHS.contains(&path) || LOG_SKIP_PREFIXES.iter().any(|p| path.starts_with(p))
}

/// Short request id: the first 8 hex digits of a random UUID
pub fn new_request_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

/// Constant-time string comparison
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (a_byte, b_byte) in a.bytes().zip(b.bytes()) {
        result |= a_byte ^ b_byte;
    }

    result == 0
}
