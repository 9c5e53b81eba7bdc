//! GitHub commit polling configuration

use super::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Account whose contributions are counted
    #[serde(default)]
    pub username: String,
    /// Personal access token used as bearer credential
    #[serde(default)]
    pub token: String,
    /// GraphQL endpoint
    #[serde(default = "default_github_api_url")]
    pub api_url: String,
    /// Seconds between background refreshes
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            token: String::new(),
            api_url: default_github_api_url(),
            poll_interval_secs: default_poll_interval(),
            timeout_secs: default_request_timeout(),
        }
    }
}

impl GithubConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.poll_interval_secs < 60 {
            return Err("GitHub poll interval must be at least 60 seconds".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("GitHub request timeout must be non-zero".to_string());
        }
        Ok(())
    }

    /// Both username and token are present
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.token.is_empty()
    }
}
