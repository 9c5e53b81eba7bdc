//! Uptime and upstream tracking

use super::types::{HealthReport, UpstreamStatus};
use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::RwLock;
use std::time::{Duration, Instant};
use tracing::debug;

/// Tracks process start and the latest upstream status
pub struct HealthMonitor {
    service: String,
    started_at: DateTime<Utc>,
    started: Instant,
    upstream: RwLock<UpstreamStatus>,
}

impl HealthMonitor {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            started_at: Utc::now(),
            started: Instant::now(),
            upstream: RwLock::new(UpstreamStatus::default()),
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    /// Store the latest status pushed by the presence feed
    pub fn record_upstream(&self, status: UpstreamStatus) {
        debug!(
            "Upstream status: connected={}, guilds={}",
            status.connected, status.guilds
        );
        *self.upstream.write() = status;
    }

    pub fn upstream(&self) -> UpstreamStatus {
        self.upstream.read().clone()
    }

    /// Snapshot for `/health`
    pub fn report(&self, websocket_clients: usize) -> HealthReport {
        let upstream = self.upstream();
        let uptime_seconds = self.uptime().as_secs();

        HealthReport {
            status: if upstream.connected { "healthy" } else { "starting" }.to_string(),
            service: self.service.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime: format_uptime(uptime_seconds),
            uptime_seconds,
            started_at: self.started_at().to_rfc3339_opts(SecondsFormat::Secs, true),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            upstream,
            websocket_clients,
        }
    }
}

/// `3725` -> `1h 2m 5s`
pub(super) fn format_uptime(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{}h {}m {}s", hours, minutes, seconds)
}
