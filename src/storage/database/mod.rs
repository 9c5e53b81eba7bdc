//! Database storage implementation using SeaORM
//!
//! Holds the visitor table. SQLite by default, PostgreSQL behind the
//! `postgres` feature.

/// Database entities module
pub mod entities;
/// Database migration module
pub mod migration;
/// SeaORM database implementation module
pub mod seaorm_db;

pub use seaorm_db::SeaOrmDatabase as Database;
