//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::broadcast::BroadcastHub;
use crate::core::rate_limiter::RateLimiter;
use crate::monitoring::HealthMonitor;
use crate::services::{GithubClient, StatsStore, VisitorStore};
use crate::storage::Database;
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// HTTP server state shared across handlers
///
/// Every component is behind an `Arc`, so cloning the state per worker is
/// cheap and all workers see the same snapshot, limiter and registry.
#[derive(Clone)]
pub struct AppState {
    /// Configuration (shared read-only)
    pub config: Arc<Config>,
    pub limiter: Arc<RateLimiter>,
    pub hub: Arc<BroadcastHub>,
    pub stats: Arc<StatsStore>,
    pub visitors: Arc<VisitorStore>,
    pub health: Arc<HealthMonitor>,
}

impl AppState {
    /// Assemble state from already constructed components
    pub fn new(
        config: Config,
        hub: Arc<BroadcastHub>,
        stats: Arc<StatsStore>,
        visitors: Arc<VisitorStore>,
    ) -> Self {
        let limiter = Arc::new(RateLimiter::new(&config.rate_limit));
        let health = Arc::new(HealthMonitor::new(config.server.service_name.clone()));
        if limiter.is_enabled() {
            info!(
                "Rate limiting {} requests per {}s",
                limiter.limit(),
                config.rate_limit.window_secs
            );
        } else {
            info!("Rate limiting disabled");
        }

        Self {
            config: Arc::new(config),
            limiter,
            hub,
            stats,
            visitors,
            health,
        }
    }

    /// Build every component from configuration
    pub async fn build(config: Config) -> Result<Self> {
        let hub = Arc::new(BroadcastHub::new());

        let github = Arc::new(GithubClient::new(&config.github)?);
        let stats = Arc::new(
            StatsStore::new(
                Arc::clone(&hub),
                github,
                config.storage.commits_cache_path(),
                Duration::from_secs(config.github.poll_interval_secs),
            )
            .await,
        );

        let db = Database::new(&config.storage.database).await?;
        db.migrate().await?;
        let visitors = Arc::new(VisitorStore::new(
            Arc::new(db),
            config.security.visitor_hash_salt.clone(),
        ));

        info!("Application state initialized");
        Ok(Self::new(config, hub, stats, visitors))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
