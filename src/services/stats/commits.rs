//! Commit cache file and GitHub polling

use super::store::StatsStore;
use super::types::CommitsInfo;
use crate::utils::error::Result;
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

impl StatsStore {
    /// Fetch fresh commit stats and publish them.
    ///
    /// On failure the snapshot and cache file are left as they were and the
    /// last known total is returned.
    pub async fn refresh_commit_stats(&self) -> u64 {
        let _guard = self.refresh_lock.lock().await;

        let commits = match self.source.fetch_commits().await {
            Ok(commits) => commits,
            Err(e) => {
                warn!("GitHub commit refresh failed: {}", e);
                return self.commits_total();
            }
        };

        let value = match serde_json::to_value(&commits) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to encode commit stats: {}", e);
                return self.commits_total();
            }
        };

        {
            let mut state = self.state.lock();
            state.data.insert("commits".to_string(), value);
            state.version += 1;
        }

        if let Err(e) = save_commit_cache(&self.cache_path, &commits).await {
            warn!(
                "Failed to write commit cache {}: {}",
                self.cache_path.display(),
                e
            );
        }

        self.publish().await;

        info!("GitHub commits updated: {} this year", commits.this_year);
        commits.this_year
    }

    /// Refresh now, then every poll interval until `shutdown` is cancelled
    pub fn start_commit_polling(self: Arc<Self>, shutdown: CancellationToken) -> JoinHandle<()> {
        let store = Arc::clone(&self);
        tokio::spawn(async move {
            info!(
                "Starting GitHub commit polling every {}s",
                store.poll_interval.as_secs()
            );

            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    _ = store.refresh_commit_stats() => {}
                }

                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    _ = tokio::time::sleep(store.poll_interval) => {}
                }
            }

            debug!("GitHub commit polling stopped");
        })
    }
}

/// Read `commits.json`; a missing or unreadable file yields `None`
pub(super) async fn load_commit_cache(path: &Path) -> Option<CommitsInfo> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No commit cache at {}", path.display());
            return None;
        }
        Err(e) => {
            warn!("Failed to read commit cache {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(commits) => Some(commits),
        Err(e) => {
            warn!("Failed to parse commit cache {}: {}", path.display(), e);
            None
        }
    }
}

/// Write `commits.json` through a temporary file and rename
pub(super) async fn save_commit_cache(path: &Path, commits: &CommitsInfo) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let content = serde_json::to_vec(commits)?;
    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, content).await?;
    tokio::fs::rename(&tmp_path, path).await?;
    Ok(())
}
