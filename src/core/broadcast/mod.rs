//! WebSocket fan-out
//!
//! The hub owns the registry of live connections and delivers one serialized
//! payload to each of them. Sinks that fail a send are dropped after the sweep.

mod hub;
mod sink;

#[cfg(test)]
pub(crate) mod testing;

pub use hub::{BroadcastHub, ConnectionId};
pub use sink::StatsSink;
