//! Type conversions for ApiError

use super::types::ApiError;

impl From<actix_ws::Closed> for ApiError {
    fn from(_: actix_ws::Closed) -> Self {
        ApiError::ConnectionClosed("websocket session closed".to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("Background task failed: {}", err))
    }
}
