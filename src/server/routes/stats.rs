//! Stats endpoints

use crate::server::middleware::constant_time_eq;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{ApiError, Result};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/stats", web::get().to(get_stats))
        .route("/commits/refresh", web::post().to(refresh_commits));
}

/// Payload of a successful manual refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResult {
    pub commits_this_year: u64,
}

/// Current snapshot
pub async fn get_stats(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(state.stats.get()))
}

/// Force a GitHub refresh; requires `X-API-Key`
pub async fn refresh_commits(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let expected = &state.config.security.commits_api_key;
    let provided = req
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if expected.is_empty() || !constant_time_eq(provided, expected) {
        warn!("Rejected commit refresh with invalid API key");
        return Err(ApiError::unauthorized("Invalid or missing API key"));
    }

    let commits_this_year = state.stats.refresh_commit_stats().await;
    info!("Manual commit refresh: {} this year", commits_this_year);

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        RefreshResult { commits_this_year },
        "Commits refreshed",
    )))
}
