//! Railside Topology
//!
//! Read-only topology store backed by two JSON documents:
//!
//! - `layouts.json`: `{"data": [{"number", "content": {"stations": [{"pointID"}]}}]}`
//! - `lines.json`: `{"data": [{"stations", "remote_stations", "signal_rules", "entrance_signals", "lines"}]}`
//!
//! Both are loaded once; every lookup afterwards is answered from memory.

mod store;

pub use store::JsonTopologyStore;

// Re-export the port for convenience
pub use railside_ports::{TopologyError, TopologyResult, TopologyStore};
