//! Live snapshot with one-level merge and broadcast

use super::github::CommitSource;
use super::types::{StatsMessage, StatsSnapshot};
use crate::core::broadcast::{BroadcastHub, ConnectionId, StatsSink};
use crate::utils::error::Result;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub(super) struct SnapshotState {
    pub(super) data: Map<String, Value>,
    /// Bumped on every mutation
    pub(super) version: u64,
}

/// Process-wide stats snapshot
pub struct StatsStore {
    pub(super) state: Mutex<SnapshotState>,
    pub(super) hub: Arc<BroadcastHub>,
    pub(super) source: Arc<dyn CommitSource>,
    pub(super) cache_path: PathBuf,
    pub(super) poll_interval: Duration,
    /// Serializes commit refreshes so the cache file never goes backwards
    pub(super) refresh_lock: tokio::sync::Mutex<()>,
    /// Serializes client-facing sends; holds the last broadcast version
    pub(super) publish_lock: tokio::sync::Mutex<u64>,
}

impl StatsStore {
    /// Build a store with default stats, then overlay the commit cache at `cache_path`
    pub async fn new(
        hub: Arc<BroadcastHub>,
        source: Arc<dyn CommitSource>,
        cache_path: PathBuf,
        poll_interval: Duration,
    ) -> Self {
        let mut data = default_snapshot();
        if let Some(commits) = super::commits::load_commit_cache(&cache_path).await {
            match serde_json::to_value(&commits) {
                Ok(value) => {
                    data.insert("commits".to_string(), value);
                }
                Err(e) => warn!("Ignoring commit cache: {}", e),
            }
        }

        Self {
            state: Mutex::new(SnapshotState { data, version: 0 }),
            hub,
            source,
            cache_path,
            poll_interval,
            refresh_lock: tokio::sync::Mutex::new(()),
            publish_lock: tokio::sync::Mutex::new(0),
        }
    }

    /// Copy of the current snapshot
    pub fn get(&self) -> Value {
        Value::Object(self.state.lock().data.clone())
    }

    /// Merge `partial` into the snapshot and push the result to connected clients.
    ///
    /// Object values are merged one level deep; anything else replaces the old
    /// value. Keys that are not part of the snapshot are ignored.
    pub async fn update(&self, partial: Map<String, Value>) {
        {
            let mut state = self.state.lock();
            merge_one_level(&mut state.data, partial);
            state.version += 1;
        }

        self.publish().await;
    }

    /// Send the current snapshot to `sink`, then register it for broadcasts.
    ///
    /// The sink is never registered if the initial send fails.
    pub async fn attach(&self, sink: Arc<dyn StatsSink>) -> Result<ConnectionId> {
        // Updates merged meanwhile are broadcast once the lock is released
        let _published = self.publish_lock.lock().await;
        let text = self.snapshot_message()?;
        sink.send_text(text).await?;
        Ok(self.hub.connect(sink))
    }

    /// Remove a connection from the broadcast set
    pub fn detach(&self, id: &ConnectionId) {
        self.hub.disconnect(id);
    }

    /// `developer.avatar` when set to a non-empty string
    pub fn developer_avatar(&self) -> Option<String> {
        let state = self.state.lock();
        state
            .data
            .get("developer")
            .and_then(|d| d.get("avatar"))
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
    }

    /// `commits.this_year`
    pub fn commits_total(&self) -> u64 {
        let state = self.state.lock();
        state
            .data
            .get("commits")
            .and_then(|c| c.get("this_year"))
            .and_then(Value::as_u64)
            .unwrap_or(0)
    }

    pub fn hub(&self) -> &Arc<BroadcastHub> {
        &self.hub
    }

    fn snapshot_message(&self) -> Result<String> {
        let snapshot = self.get();
        Ok(serde_json::to_string(&StatsMessage::stats(snapshot))?)
    }

    /// Broadcast the latest snapshot unless that version already went out.
    ///
    /// Publishers take turns and always read the newest state, so a client
    /// never receives an older snapshot after a newer one.
    pub(super) async fn publish(&self) {
        let mut published = self.publish_lock.lock().await;
        if self.hub.connection_count() == 0 {
            return;
        }

        let (snapshot, version) = {
            let state = self.state.lock();
            (Value::Object(state.data.clone()), state.version)
        };
        if version <= *published {
            debug!("Stats version {} already published", version);
            return;
        }

        match self.hub.broadcast(&StatsMessage::stats(snapshot)).await {
            Ok(delivered) => debug!("Stats pushed to {} clients", delivered),
            Err(e) => warn!("Failed to serialize stats broadcast: {}", e),
        }
        *published = version;
    }
}

fn default_snapshot() -> Map<String, Value> {
    match serde_json::to_value(StatsSnapshot::default()) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Apply `partial` to `target`, one level deep
pub(super) fn merge_one_level(target: &mut Map<String, Value>, partial: Map<String, Value>) {
    for (key, value) in partial {
        match (target.get_mut(&key), value) {
            (None, _) => debug!("Ignoring unknown stats field: {}", key),
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                existing.extend(incoming);
            }
            (Some(slot), value) => *slot = value,
        }
    }
}
