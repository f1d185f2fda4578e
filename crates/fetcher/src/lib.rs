//! Railside Fetcher
//!
//! Implementations of the `SnapshotFetcher` and `ServerDirectory` ports.
//!
//! The upstream poller (a separate process) writes one JSON file per server
//! and document into a cache directory:
//!
//! ```text
//! files/
//!   .servers.json          {"data": [{"ServerCode", "IsActive", ...}]}
//!   en1.timetable.json     [{"trainNoLocal", ...}]
//!   en1.trains.json        {"data": [{"TrainNoLocal", "tpl_next", "tpl_last", ...}]}
//!   en1.stations.json      {"data": [{"Name", "DispatchedBy", ...}]}
//!   en1.timezones.json     1
//! ```
//!
//! `FileSnapshotStore` only ever reads these files. `InMemorySnapshotFetcher`
//! serves documents published to it directly.

mod directory;
mod document;
mod file_store;
mod memory;

pub use directory::FileServerDirectory;
pub use file_store::FileSnapshotStore;
pub use memory::{InMemorySnapshotFetcher, ServerDocuments};

// Re-export the ports for convenience
pub use railside_ports::{
    DocumentKind, FetchError, FetchResult, ServerDirectory, SnapshotFetcher,
};
