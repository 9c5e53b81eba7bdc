//! Visitor counting
//!
//! Client addresses are salted and hashed before they reach storage.

mod identity;
mod store;


pub use identity::{hash_ip, is_automated};
pub use store::{VisitorCounts, VisitorStore};
