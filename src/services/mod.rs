//! Services module
//!
//! Business logic behind the HTTP routes.

pub mod stats;
pub mod visitors;

pub use stats::{CommitSource, GithubClient, StatsStore};
pub use visitors::{VisitorCounts, VisitorStore};
