use railside_core::{DispatchAssignment, LiveTrain, TimetableEntry};

use crate::error::FetchResult;

/// Port for the latest upstream documents of a server
///
/// Implementations own caching and refresh. Every call is a blocking read
/// of whatever document currently exists.
pub trait SnapshotFetcher: Send + Sync {
    /// Scheduled movements, in document order
    fn timetable(&self, server: &str) -> FetchResult<Vec<TimetableEntry>>;

    /// Live trains, in document order
    fn trains(&self, server: &str) -> FetchResult<Vec<LiveTrain>>;

    /// Dispatcher assignments of the server's stations
    fn station_dispatch(&self, server: &str) -> FetchResult<Vec<DispatchAssignment>>;

    /// Get the fetcher's name/identifier for debugging
    fn name(&self) -> &str {
        "SnapshotFetcher"
    }
}
