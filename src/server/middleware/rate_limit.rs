//! Rate limiting middleware

use super::helpers::{client_ip, is_rate_limit_exempt, rate_limit_key};
use crate::core::rate_limiter::{RateLimitResult, RateLimiter};
use crate::utils::error::ErrorBody;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{self, HeaderName, HeaderValue};
use actix_web::HttpResponse;
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::debug;

const X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
const X_RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");

/// Rate limit middleware for Actix-web
pub struct RateLimitMiddleware {
    limiter: Arc<RateLimiter>,
}

impl RateLimitMiddleware {
    pub fn new(limiter: Arc<RateLimiter>) -> Self {
        Self { limiter }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimitMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RateLimitMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddlewareService {
            service,
            limiter: Arc::clone(&self.limiter),
        }))
    }
}

/// Service implementation for rate limit middleware
pub struct RateLimitMiddlewareService<S> {
    service: S,
    limiter: Arc<RateLimiter>,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let path = req.path().to_string();
        if is_rate_limit_exempt(&path) {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        let ip = client_ip(req.request());
        let result = self.limiter.check(&rate_limit_key(&ip, &path));

        if !result.allowed {
            debug!(
                "Rate limit exceeded for {} on {}, retry in {:.1}s",
                ip,
                path,
                result.retry_after_secs.unwrap_or_default()
            );
            let response = too_many_requests(&result);
            return Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) });
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;
            let headers = res.headers_mut();
            headers.insert(X_RATELIMIT_LIMIT, HeaderValue::from(result.limit));
            headers.insert(X_RATELIMIT_REMAINING, HeaderValue::from(result.remaining));
            Ok(res.map_into_left_body())
        })
    }
}

/// 429 response with retry hints
pub(super) fn too_many_requests(result: &RateLimitResult) -> HttpResponse {
    HttpResponse::TooManyRequests()
        .insert_header((header::RETRY_AFTER, result.retry_after_header()))
        .insert_header((X_RATELIMIT_LIMIT, result.limit))
        .insert_header((X_RATELIMIT_REMAINING, 0u32))
        .json(ErrorBody::new(
            "RATE_LIMIT_EXCEEDED",
            "Rate limit exceeded".to_string(),
        ))
}
