//! Connection registry and fan-out

use super::sink::StatsSink;
use crate::utils::error::Result;
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Identifier handed out on `connect`
pub type ConnectionId = Uuid;

/// Registry of live connections
#[derive(Default)]
pub struct BroadcastHub {
    connections: Mutex<HashMap<ConnectionId, Arc<dyn StatsSink>>>,
}

impl BroadcastHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink and return its id
    pub fn connect(&self, sink: Arc<dyn StatsSink>) -> ConnectionId {
        let id = Uuid::new_v4();
        let total = {
            let mut connections = self.connections.lock();
            connections.insert(id, sink);
            connections.len()
        };
        debug!("WebSocket {} connected ({} total)", id, total);
        id
    }

    /// Remove a connection; unknown ids are ignored
    pub fn disconnect(&self, id: &ConnectionId) {
        let removed = self.connections.lock().remove(id).is_some();
        if removed {
            debug!("WebSocket {} disconnected", id);
        }
    }

    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Serialize `payload` once and push it to every connection.
    ///
    /// Returns the number of successful deliveries. Connections whose send
    /// failed are removed once every sink has been tried.
    pub async fn broadcast<T: Serialize + ?Sized>(&self, payload: &T) -> Result<usize> {
        let text = serde_json::to_string(payload)?;
        Ok(self.broadcast_text(text).await)
    }

    /// Push an already serialized message to every connection
    pub async fn broadcast_text(&self, text: String) -> usize {
        let targets: Vec<(ConnectionId, Arc<dyn StatsSink>)> = self
            .connections
            .lock()
            .iter()
            .map(|(id, sink)| (*id, Arc::clone(sink)))
            .collect();

        if targets.is_empty() {
            return 0;
        }

        let mut delivered = 0;
        let mut failed = Vec::new();
        for (id, sink) in targets {
            match sink.send_text(text.clone()).await {
                Ok(()) => delivered += 1,
                Err(e) => {
                    debug!("Dropping WebSocket {} after failed send: {}", id, e);
                    failed.push(id);
                }
            }
        }

        if !failed.is_empty() {
            let mut connections = self.connections.lock();
            for id in &failed {
                connections.remove(id);
            }
        }

        delivered
    }
}
