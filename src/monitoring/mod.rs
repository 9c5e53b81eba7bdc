//! Monitoring
//!
//! Process uptime and the presence feed's connection state, reported by
//! `/health`.

pub mod health;

pub use health::{HealthMonitor, HealthReport, UpstreamStatus};
