use crate::utils::error::{ApiError, Result};
use chrono::{DateTime, Utc};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, visitor};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert `(ip_hash, visit_date)` unless it already exists.
    ///
    /// Returns whether a row was written.
    pub async fn record_visit(
        &self,
        ip_hash: &str,
        visit_date: &str,
        visited_at: DateTime<Utc>,
    ) -> Result<bool> {
        let existing = entities::Visitor::find()
            .filter(visitor::Column::IpHash.eq(ip_hash))
            .filter(visitor::Column::VisitDate.eq(visit_date))
            .one(&self.db)
            .await
            .map_err(ApiError::Database)?;

        if existing.is_some() {
            return Ok(false);
        }

        let active_model = visitor::ActiveModel {
            id: NotSet,
            ip_hash: Set(ip_hash.to_string()),
            visited_at: Set(visited_at),
            visit_date: Set(visit_date.to_string()),
        };

        match entities::Visitor::insert(active_model).exec(&self.db).await {
            Ok(_) => {
                debug!("Recorded visit for {}", visit_date);
                Ok(true)
            }
            // A concurrent request for the same identity won the insert
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(false)
            }
            Err(e) => Err(ApiError::Database(e)),
        }
    }

    /// Total recorded visits
    pub async fn count_visits(&self) -> Result<u64> {
        entities::Visitor::find()
            .count(&self.db)
            .await
            .map_err(ApiError::Database)
    }

    /// Visits recorded on one day
    pub async fn count_visits_on(&self, visit_date: &str) -> Result<u64> {
        entities::Visitor::find()
            .filter(visitor::Column::VisitDate.eq(visit_date))
            .count(&self.db)
            .await
            .map_err(ApiError::Database)
    }
}
