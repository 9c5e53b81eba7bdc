//! Test fixtures and doubles

use async_trait::async_trait;
use parking_lot::Mutex;
use portfolio_stats::config::{Config, GithubConfig};
use portfolio_stats::core::broadcast::StatsSink;
use portfolio_stats::services::{CommitSource, stats::CalendarDay, stats::CommitsInfo};
use portfolio_stats::{ApiError, Result};
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;

/// Commit source with a fixed answer
pub struct StaticSource {
    result: Option<CommitsInfo>,
}

impl StaticSource {
    pub fn ok(total: u64) -> Arc<Self> {
        Arc::new(Self {
            result: Some(CommitsInfo {
                this_year: total,
                year_start: Some("2026-01-01".to_string()),
                last_fetched: Some("2026-03-01T00:00:00Z".to_string()),
                calendar: vec![CalendarDay {
                    date: "2026-01-01".to_string(),
                    count: total,
                    level: "FOURTH_QUARTILE".to_string(),
                }],
            }),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { result: None })
    }
}

#[async_trait]
impl CommitSource for StaticSource {
    async fn fetch_commits(&self) -> Result<CommitsInfo> {
        self.result
            .clone()
            .ok_or_else(|| ApiError::Upstream("GitHub unavailable".to_string()))
    }
}

/// Sink that keeps every frame
#[derive(Default)]
pub struct CollectingSink {
    frames: Mutex<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn frames(&self) -> Vec<Value> {
        self.frames
            .lock()
            .iter()
            .map(|f| serde_json::from_str(f).expect("frame is JSON"))
            .collect()
    }
}

#[async_trait]
impl StatsSink for CollectingSink {
    async fn send_text(&self, text: String) -> Result<()> {
        self.frames.lock().push(text);
        Ok(())
    }
}

/// GitHub settings pointed at a mock server
pub fn github_config(server_uri: &str) -> GithubConfig {
    GithubConfig {
        username: "octocat".to_string(),
        token: "ghp_test".to_string(),
        api_url: format!("{}/graphql", server_uri),
        timeout_secs: 5,
        ..GithubConfig::default()
    }
}

/// Configuration writing into `data_dir` with an in-memory visitor database
pub fn app_config(data_dir: &Path) -> Config {
    let mut config = Config::default();
    config.storage.data_dir = data_dir.to_string_lossy().into_owned();
    config.storage.database.url = "sqlite::memory:".to_string();
    config.storage.database.max_connections = 1;
    config
}

/// Contributions payload as the GraphQL API returns it
pub fn contributions_response(commits: u64, restricted: u64, days: &[(&str, u64, Option<&str>)]) -> Value {
    let days: Vec<Value> = days
        .iter()
        .map(|(date, count, level)| {
            let mut day = json!({"date": date, "contributionCount": count});
            if let Some(level) = level {
                day["contributionLevel"] = json!(level);
            }
            day
        })
        .collect();

    json!({
        "data": {
            "user": {
                "contributionsCollection": {
                    "totalCommitContributions": commits,
                    "restrictedContributionsCount": restricted,
                    "contributionCalendar": {
                        "totalContributions": commits + restricted,
                        "weeks": [{"contributionDays": days}]
                    }
                }
            }
        }
    })
}
