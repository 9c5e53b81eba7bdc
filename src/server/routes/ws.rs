//! Live stats over WebSocket
//!
//! Each client receives the full snapshot on connect and again after every
//! change. Inbound frames are read only to answer pings and notice closes.

use crate::core::broadcast::StatsSink;
use crate::server::state::AppState;
use actix_web::{HttpRequest, HttpResponse, rt, web};
use actix_ws::Message;
use std::sync::Arc;
use tracing::debug;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/ws/stats", web::get().to(stats_socket));
}

/// Upgrade and stream snapshots until the client leaves
pub async fn stats_socket(
    req: HttpRequest,
    body: web::Payload,
    state: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    let (response, session, mut stream) = actix_ws::handle(&req, body)?;
    let stats = Arc::clone(&state.stats);

    rt::spawn(async move {
        let sink: Arc<dyn StatsSink> = Arc::new(session.clone());
        let id = match stats.attach(sink).await {
            Ok(id) => id,
            Err(e) => {
                debug!("WebSocket closed before initial snapshot: {}", e);
                let _ = session.close(None).await;
                return;
            }
        };

        let mut close_reason = None;
        while let Some(message) = stream.recv().await {
            match message {
                Ok(Message::Ping(bytes)) => {
                    let mut session = session.clone();
                    if session.pong(&bytes).await.is_err() {
                        break;
                    }
                }
                Ok(Message::Close(reason)) => {
                    close_reason = reason;
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    debug!("WebSocket {} protocol error: {}", id, e);
                    break;
                }
            }
        }

        stats.detach(&id);
        let _ = session.close(close_reason).await;
    });

    Ok(response)
}
