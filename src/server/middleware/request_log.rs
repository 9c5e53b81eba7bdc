//! Request logging middleware
//!
//! Tags every request with a short id (echoed as `X-Request-ID`) and logs the
//! outcome at a level chosen by status.

use super::helpers::{is_log_skipped, log_client_ip, new_request_id};
use actix_web::HttpMessage;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::StatusCode;
use actix_web::http::header::{HeaderName, HeaderValue};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::time::Instant;
use tracing::{debug, error, warn};

const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Request id stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Request logging middleware for Actix-web
pub struct RequestLogMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RequestLogMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestLogMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLogMiddlewareService { service }))
    }
}

/// Service implementation for request logging middleware
pub struct RequestLogMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestLogMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = new_request_id();
        req.extensions_mut().insert(RequestId(request_id.clone()));

        let path = req.path().to_string();
        let log_enabled = !is_log_skipped(&path);
        let method = req.method().to_string();
        let ip = log_client_ip(req.request());
        let start_time = Instant::now();

        if log_enabled {
            debug!(request_id = %request_id, %method, %path, %ip, "API request");
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = match fut.await {
                Ok(res) => res,
                Err(e) => {
                    if log_enabled {
                        error!(
                            request_id = %request_id,
                            %method,
                            %path,
                            duration_ms = start_time.elapsed().as_millis() as u64,
                            "API error: {}",
                            e
                        );
                    }
                    return Err(e);
                }
            };

            if let Ok(value) = HeaderValue::from_str(&request_id) {
                res.headers_mut().insert(X_REQUEST_ID, value);
            }

            if log_enabled {
                let status = res.status();
                let duration_ms = start_time.elapsed().as_millis() as u64;
                log_response(&request_id, &method, &path, status, duration_ms);
            }

            Ok(res)
        })
    }
}

fn log_response(request_id: &str, method: &str, path: &str, status: StatusCode, duration_ms: u64) {
    let code = status.as_u16();
    if status.is_server_error() {
        error!(request_id, method, path, status = code, duration_ms, "API response");
    } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        warn!(request_id, method, path, status = code, duration_ms, "API response");
    } else {
        debug!(request_id, method, path, status = code, duration_ms, "API response");
    }
}
