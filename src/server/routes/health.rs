//! Health check endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Uptime, version and upstream connection state
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let report = state.health.report(state.hub.connection_count());
    HttpResponse::Ok().json(ApiResponse::success(report))
}
