//! Storage layer
//!
//! The commit cache is a single JSON file owned by the stats service; the
//! relational store here backs visitor counting.

/// Database storage module
pub mod database;

pub use database::Database;
