//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::server::middleware::{RateLimitMiddleware, RequestLogMiddleware};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{ApiError, Result};
use actix_cors::Cors;
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");
        let state = AppState::build(config.clone()).await?;
        Ok(Self::with_state(state))
    }

    /// Create a server around prepared state
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config.server.clone(),
            state,
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let cors_config = &state.config.server.cors;
        let mut cors = Cors::default();

        if cors_config.enabled {
            if cors_config.allows_all_origins() {
                cors = cors.allow_any_origin();
            } else {
                for origin in &cors_config.allowed_origins {
                    cors = cors.allowed_origin(origin);
                }
            }
            cors = cors
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allow_any_header()
                .expose_headers(vec![
                    "x-request-id",
                    "x-ratelimit-limit",
                    "x-ratelimit-remaining",
                    "retry-after",
                ])
                .max_age(cors_config.max_age);
        }

        let limiter = Arc::clone(&state.limiter);

        App::new()
            .app_data(state)
            .wrap(RateLimitMiddleware::new(limiter))
            .wrap(cors)
            .wrap(RequestLogMiddleware)
            .wrap(DefaultHeaders::new().add(("Server", "portfolio-stats")))
            .configure(routes::configure_routes)
    }

    /// Run the server and the commit poller until the server stops
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        info!("Starting HTTP server on {}", bind_addr);

        let shutdown = CancellationToken::new();
        let poller = Arc::clone(&self.state.stats).start_commit_polling(shutdown.clone());

        let state = web::Data::new(self.state);
        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = match server.bind(&bind_addr) {
            Ok(server) => server.run(),
            Err(e) => {
                shutdown.cancel();
                let _ = poller.await;
                return Err(ApiError::internal(format!(
                    "Failed to bind {}: {}",
                    bind_addr, e
                )));
            }
        };

        info!("HTTP server listening on {}", bind_addr);
        let result = server.await;

        shutdown.cancel();
        if let Err(e) = poller.await {
            warn!("Commit poller ended abnormally: {}", e);
        }

        result.map_err(|e| ApiError::internal(format!("Server error: {}", e)))?;
        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
