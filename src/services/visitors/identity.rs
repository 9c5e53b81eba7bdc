//! Privacy-preserving visitor identity

use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

static AUTOMATED_AGENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)bot|crawl|spider|slurp|curl|wget|python-requests|python-urllib|httpx|aiohttp|go-http-client|java/|okhttp|libwww|headless|phantomjs|scrapy|axios|node-fetch|postman|insomnia",
    )
    .expect("Invalid automated agent regex")
});

/// Lowercase hex SHA-256 of `salt:ip`
pub fn hash_ip(salt: &str, ip: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(ip.as_bytes());
    hex::encode(hasher.finalize())
}

/// Empty user agents and known tools, crawlers and headless browsers
pub fn is_automated(user_agent: &str) -> bool {
    let user_agent = user_agent.trim();
    user_agent.is_empty() || AUTOMATED_AGENT.is_match(user_agent)
}
