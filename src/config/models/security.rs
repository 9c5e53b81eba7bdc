//! Secrets guarding the write endpoints and visitor hashing

use super::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Key expected in `X-API-Key` for `POST /commits/refresh`
    #[serde(default)]
    pub commits_api_key: String,
    /// Salt mixed into visitor IP hashes
    #[serde(default = "default_visitor_salt")]
    pub visitor_hash_salt: String,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            commits_api_key: String::new(),
            visitor_hash_salt: default_visitor_salt(),
        }
    }
}

impl SecurityConfig {
    /// Log settings that are legal but unsafe or inert
    pub fn warn_insecure(&self) {
        if self.commits_api_key.is_empty() {
            warn!("No commits API key configured; /commits/refresh will reject every request");
        }
        if self.visitor_hash_salt == default_visitor_salt() {
            warn!("Visitor hash salt is the built-in default; set VISITOR_HASH_SALT");
        }
    }
}
