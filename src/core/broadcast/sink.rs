//! Outbound half of a live connection

use crate::utils::error::Result;
use async_trait::async_trait;

/// Something a text frame can be pushed to
#[async_trait]
pub trait StatsSink: Send + Sync {
    /// Deliver one text message
    async fn send_text(&self, text: String) -> Result<()>;
}

#[async_trait]
impl StatsSink for actix_ws::Session {
    async fn send_text(&self, text: String) -> Result<()> {
        // Session handles are cheap clones over the same channel
        let mut session = self.clone();
        session.text(text).await?;
        Ok(())
    }
}
