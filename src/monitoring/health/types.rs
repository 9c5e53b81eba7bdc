//! Health reporting types

use serde::{Deserialize, Serialize};

/// Connection state of the presence feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamStatus {
    pub connected: bool,
    pub latency_ms: Option<u64>,
    pub guilds: u32,
}

/// Body of `/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// `healthy` once the upstream is connected, `starting` before
    pub status: String,
    pub service: String,
    pub version: String,
    /// `Hh Mm Ss`
    pub uptime: String,
    pub uptime_seconds: u64,
    pub started_at: String,
    pub timestamp: String,
    pub upstream: UpstreamStatus,
    pub websocket_clients: usize,
}
