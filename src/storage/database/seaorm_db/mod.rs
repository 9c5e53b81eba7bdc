// Module declarations
mod connection;
mod types;
mod visitor_ops;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
