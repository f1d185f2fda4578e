//! Railside Ports
//!
//! Port definitions (traits) for the Railside aggregator.
//! These define the boundaries between the engine and its data sources.

mod directory;
mod error;
mod fetcher;
mod topology;

pub use directory::ServerDirectory;
pub use error::{DocumentKind, FetchError, FetchResult, TopologyError, TopologyResult};
pub use fetcher::SnapshotFetcher;
pub use topology::TopologyStore;
