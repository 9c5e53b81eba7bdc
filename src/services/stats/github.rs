//! GitHub contribution source

use super::types::{CalendarDay, CommitsInfo, default_level};
use crate::config::models::GithubConfig;
use crate::utils::error::{ApiError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Datelike, SecondsFormat, TimeZone, Utc};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Provider of the current year's commit activity
#[async_trait]
pub trait CommitSource: Send + Sync {
    async fn fetch_commits(&self) -> Result<CommitsInfo>;
}

const CONTRIBUTIONS_QUERY: &str = r#"
query($username: String!, $from: DateTime!, $to: DateTime!) {
    user(login: $username) {
        contributionsCollection(from: $from, to: $to) {
            totalCommitContributions
            restrictedContributionsCount
            contributionCalendar {
                totalContributions
                weeks {
                    contributionDays {
                        date
                        contributionCount
                        contributionLevel
                    }
                }
            }
        }
    }
}
"#;

/// GraphQL client for the contributions API
pub struct GithubClient {
    http_client: reqwest::Client,
    api_url: String,
    username: String,
    token: String,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("portfolio-stats/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            api_url: config.api_url.clone(),
            username: config.username.clone(),
            token: config.token.clone(),
        })
    }

    async fn fetch_at(&self, now: DateTime<Utc>) -> Result<CommitsInfo> {
        if self.username.is_empty() {
            return Err(ApiError::config("GITHUB_USERNAME not set"));
        }
        if self.token.is_empty() {
            return Err(ApiError::config("GITHUB_TOKEN not set"));
        }

        let year_start = Utc
            .with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| ApiError::internal("Invalid start of year"))?;

        let body = json!({
            "query": CONTRIBUTIONS_QUERY,
            "variables": {
                "username": self.username,
                "from": year_start.to_rfc3339_opts(SecondsFormat::Secs, true),
                "to": now.to_rfc3339_opts(SecondsFormat::Secs, true),
            }
        });

        let response = self
            .http_client
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ApiError::upstream(format!("GitHub API returned HTTP {}", status)));
        }

        let text = response.text().await?;
        let parsed: GraphQlResponse = serde_json::from_str(&text)
            .map_err(|e| ApiError::upstream(format!("Malformed GitHub response: {}", e)))?;

        if let Some(errors) = parsed.errors {
            let detail: String = errors.to_string().chars().take(120).collect();
            return Err(ApiError::upstream(format!("GitHub GraphQL error: {}", detail)));
        }

        let collection = parsed
            .data
            .and_then(|d| d.user)
            .map(|u| u.contributions_collection)
            .ok_or_else(|| ApiError::upstream("GitHub response has no user data"))?;

        let info = collection.into_commits(
            year_start.format("%Y-%m-%d").to_string(),
            now.to_rfc3339_opts(SecondsFormat::Secs, true),
        );
        debug!(
            "Fetched {} commits across {} days",
            info.this_year,
            info.calendar.len()
        );
        Ok(info)
    }
}

#[async_trait]
impl CommitSource for GithubClient {
    async fn fetch_commits(&self) -> Result<CommitsInfo> {
        self.fetch_at(Utc::now()).await
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<GraphQlData>,
    #[serde(default)]
    errors: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GraphQlData {
    #[serde(default)]
    user: Option<GithubUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GithubUser {
    contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    #[serde(default)]
    total_commit_contributions: u64,
    #[serde(default)]
    restricted_contributions_count: u64,
    #[serde(default)]
    contribution_calendar: Option<ContributionCalendar>,
}

#[derive(Debug, Deserialize)]
struct ContributionCalendar {
    #[serde(default)]
    weeks: Vec<ContributionWeek>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionWeek {
    #[serde(default)]
    contribution_days: Vec<ContributionDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionDay {
    date: String,
    #[serde(default)]
    contribution_count: u64,
    #[serde(default = "default_level")]
    contribution_level: String,
}

impl ContributionsCollection {
    fn into_commits(self, year_start: String, fetched_at: String) -> CommitsInfo {
        let calendar = self
            .contribution_calendar
            .map(|c| c.weeks)
            .unwrap_or_default()
            .into_iter()
            .flat_map(|week| week.contribution_days)
            .map(|day| CalendarDay {
                date: day.date,
                count: day.contribution_count,
                level: day.contribution_level,
            })
            .collect();

        CommitsInfo {
            this_year: self.total_commit_contributions + self.restricted_contributions_count,
            year_start: Some(year_start),
            last_fetched: Some(fetched_at),
            calendar,
        }
    }
}
