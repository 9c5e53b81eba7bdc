//! # portfolio-stats
//!
//! Rate-limited HTTP and WebSocket gateway for a personal portfolio site.
//!
//! - **Stats**: an in-memory JSON snapshot (presence, bots, guild, commit
//!   counts) merged from partial updates and pushed to every WebSocket client
//! - **Commits**: GitHub contribution totals polled hourly and cached on disk
//! - **Visitors**: one count per hashed client address per UTC day
//! - **Rate limiting**: token bucket per client address and route
//!
//! ## Running
//!
//! ```rust,no_run
//! use portfolio_stats::server::builder::{load_config, run_server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("config/stats.yaml").await?;
//!     run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod monitoring;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

pub use config::Config;
pub use utils::error::{ApiError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build metadata stamped by `build.rs`
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Unix seconds
    pub build_time: &'static str,
    /// Short commit hash
    pub git_hash: &'static str,
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
