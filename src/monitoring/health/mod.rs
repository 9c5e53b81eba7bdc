//! Health reporting

mod monitor;
mod types;


pub use monitor::HealthMonitor;
pub use types::{HealthReport, UpstreamStatus};
