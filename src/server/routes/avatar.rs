//! Developer avatar redirect

use crate::server::state::AppState;
use actix_web::http::header;
use actix_web::{HttpResponse, web};

/// Served while no presence data has arrived
pub const DEFAULT_AVATAR_URL: &str = "https://cdn.discordapp.com/embed/avatars/0.png";

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/avatar", web::get().to(redirect_avatar));
}

/// 307 to the current avatar image
pub async fn redirect_avatar(state: web::Data<AppState>) -> HttpResponse {
    let location = state
        .stats
        .developer_avatar()
        .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string());

    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, location))
        .finish()
}
