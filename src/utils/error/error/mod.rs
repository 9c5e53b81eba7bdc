//! Error handling for the stats gateway
//!
//! This module defines all error types used throughout the gateway.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::{ErrorBody, ErrorDetail};
pub use types::{ApiError, Result};
