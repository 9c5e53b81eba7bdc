//! HTTP route modules

pub mod avatar;
pub mod health;
pub mod stats;
pub mod visitors;
pub mod ws;

use actix_web::web;
use serde::{Deserialize, Serialize};

/// Standard API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Optional human-readable note
    pub message: Option<String>,
    /// Response data
    pub data: Option<T>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Create a successful response with a message
    pub fn success_with_message<S: Into<String>>(data: T, message: S) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

/// Register every route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    stats::configure_routes(cfg);
    avatar::configure_routes(cfg);
    visitors::configure_routes(cfg);
    ws::configure_routes(cfg);
}
