//! Core request-shaping components
//!
//! Both pieces here are synchronous, lock-guarded registries shared by the
//! HTTP layer and the services.

pub mod broadcast;
pub mod rate_limiter;
