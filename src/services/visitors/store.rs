//! Daily unique visitor counting

use super::identity::{hash_ip, is_automated};
use crate::storage::Database;
use crate::utils::error::Result;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Counts returned by both visitor endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorCounts {
    pub total: u64,
    pub today: u64,
    pub tracked: bool,
}

/// Records at most one visit per hashed identity per UTC day
pub struct VisitorStore {
    db: Arc<Database>,
    salt: String,
}

impl VisitorStore {
    pub fn new(db: Arc<Database>, salt: impl Into<String>) -> Self {
        Self {
            db,
            salt: salt.into(),
        }
    }

    /// Count a visit from `ip` today unless it is automated or already counted
    pub async fn track(&self, ip: &str, user_agent: &str) -> Result<VisitorCounts> {
        self.track_on(ip, user_agent, Utc::now().date_naive()).await
    }

    /// Same as `track` for an explicit day
    pub async fn track_on(
        &self,
        ip: &str,
        user_agent: &str,
        date: NaiveDate,
    ) -> Result<VisitorCounts> {
        let tracked = if is_automated(user_agent) {
            debug!("Skipping automated visitor");
            false
        } else {
            let ip_hash = hash_ip(&self.salt, ip);
            self.db
                .record_visit(&ip_hash, &format_date(date), Utc::now())
                .await?
        };

        let mut counts = self.counts_on(date).await?;
        counts.tracked = tracked;
        Ok(counts)
    }

    /// Totals for today
    pub async fn counts(&self) -> Result<VisitorCounts> {
        self.counts_on(Utc::now().date_naive()).await
    }

    /// Totals with `today` taken as `date`
    pub async fn counts_on(&self, date: NaiveDate) -> Result<VisitorCounts> {
        let total = self.db.count_visits().await?;
        let today = self.db.count_visits_on(&format_date(date)).await?;
        Ok(VisitorCounts {
            total,
            today,
            tracked: false,
        })
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
