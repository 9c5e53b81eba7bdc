//! Visitor counting endpoints

use crate::server::middleware::client_ip;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/visitors", web::get().to(get_visitors))
        .route("/visitors/track", web::post().to(track_visitor));
}

/// Totals without recording anything
pub async fn get_visitors(state: web::Data<AppState>) -> Result<HttpResponse> {
    let counts = state.visitors.counts().await?;
    Ok(HttpResponse::Ok().json(counts))
}

/// Count the caller as today's visitor
pub async fn track_visitor(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let ip = client_ip(&req);
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let counts = state.visitors.track(&ip, user_agent).await?;
    Ok(HttpResponse::Ok().json(counts))
}
