//! HTTP server implementation
//!
//! This module provides the HTTP server, middleware and routing.

pub mod builder;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
