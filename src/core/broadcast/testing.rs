//! Sink doubles shared by unit tests

use super::StatsSink;
use crate::utils::error::{ApiError, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// Stores every message it receives
#[derive(Default)]
pub(crate) struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub(crate) fn json_messages(&self) -> Vec<serde_json::Value> {
        self.messages()
            .iter()
            .map(|m| serde_json::from_str(m).unwrap())
            .collect()
    }
}

#[async_trait]
impl StatsSink for RecordingSink {
    async fn send_text(&self, text: String) -> Result<()> {
        self.messages.lock().push(text);
        Ok(())
    }
}

/// Fails every send, like a peer that went away
#[derive(Default)]
pub(crate) struct ClosedSink;

#[async_trait]
impl StatsSink for ClosedSink {
    async fn send_text(&self, _text: String) -> Result<()> {
        Err(ApiError::connection_closed("peer gone"))
    }
}
