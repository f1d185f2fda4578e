use std::sync::Arc;

use dashmap::DashMap;
use railside_core::{DispatchAssignment, LiveTrain, TimetableEntry};
use railside_ports::{DocumentKind, FetchError, FetchResult, SnapshotFetcher};

/// The three documents of one server; `None` means not (yet) fetched
#[derive(Debug, Clone, Default)]
pub struct ServerDocuments {
    pub timetable: Option<Vec<TimetableEntry>>,
    pub trains: Option<Vec<LiveTrain>>,
    pub stations: Option<Vec<DispatchAssignment>>,
}

impl ServerDocuments {
    pub fn new(
        timetable: Vec<TimetableEntry>,
        trains: Vec<LiveTrain>,
        stations: Vec<DispatchAssignment>,
    ) -> Self {
        Self {
            timetable: Some(timetable),
            trains: Some(trains),
            stations: Some(stations),
        }
    }
}

/// Fetcher over documents published in memory
///
/// Publishing replaces a server's documents wholesale; readers see either
/// the old or the new set, never a mix of one document.
pub struct InMemorySnapshotFetcher {
    servers: Arc<DashMap<String, ServerDocuments>>,
}

impl InMemorySnapshotFetcher {
    pub fn new() -> Self {
        InMemorySnapshotFetcher {
            servers: Arc::new(DashMap::new()),
        }
    }

    /// Builder-style [`InMemorySnapshotFetcher::publish`]
    pub fn with_server(self, server: impl Into<String>, documents: ServerDocuments) -> Self {
        self.publish(server, documents);
        self
    }

    /// Replace the documents of a server
    pub fn publish(&self, server: impl Into<String>, documents: ServerDocuments) {
        self.servers.insert(server.into(), documents);
    }

    /// Forget a server; subsequent reads are unavailable
    pub fn remove(&self, server: &str) {
        self.servers.remove(server);
    }

    fn get<T: Clone>(
        &self,
        server: &str,
        document: DocumentKind,
        select: impl Fn(&ServerDocuments) -> &Option<Vec<T>>,
    ) -> FetchResult<Vec<T>> {
        let entry = self
            .servers
            .get(server)
            .ok_or_else(|| FetchError::unavailable(document, server, "unknown server"))?;

        select(entry.value())
            .clone()
            .ok_or_else(|| FetchError::unavailable(document, server, "document not cached"))
    }
}

impl Default for InMemorySnapshotFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemorySnapshotFetcher {
    fn clone(&self) -> Self {
        InMemorySnapshotFetcher {
            servers: Arc::clone(&self.servers),
        }
    }
}

impl SnapshotFetcher for InMemorySnapshotFetcher {
    fn timetable(&self, server: &str) -> FetchResult<Vec<TimetableEntry>> {
        self.get(server, DocumentKind::Timetable, |d| &d.timetable)
    }

    fn trains(&self, server: &str) -> FetchResult<Vec<LiveTrain>> {
        self.get(server, DocumentKind::Trains, |d| &d.trains)
    }

    fn station_dispatch(&self, server: &str) -> FetchResult<Vec<DispatchAssignment>> {
        self.get(server, DocumentKind::Stations, |d| &d.stations)
    }

    fn name(&self) -> &str {
        "InMemorySnapshotFetcher"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_server_is_unavailable() {
        let fetcher = InMemorySnapshotFetcher::new();
        let err = fetcher.timetable("en1").unwrap_err();

        assert_eq!(err.document(), DocumentKind::Timetable);
        assert!(!err.is_malformed());
    }

    #[test]
    fn test_missing_document_is_unavailable() {
        let fetcher = InMemorySnapshotFetcher::new().with_server(
            "en1",
            ServerDocuments {
                timetable: Some(vec![TimetableEntry::new("1")]),
                ..Default::default()
            },
        );

        assert_eq!(fetcher.timetable("en1").unwrap().len(), 1);
        assert!(fetcher.trains("en1").is_err());
        assert!(fetcher.station_dispatch("en1").is_err());
    }

    #[test]
    fn test_clones_share_published_documents() {
        let fetcher = InMemorySnapshotFetcher::new();
        let reader = fetcher.clone();

        fetcher.publish(
            "de1",
            ServerDocuments::new(
                vec![],
                vec![LiveTrain::new("7", 1, 2)],
                vec![DispatchAssignment::vacant("A")],
            ),
        );
        assert_eq!(reader.trains("de1").unwrap()[0].train_no_local, "7");

        fetcher.remove("de1");
        assert!(reader.trains("de1").is_err());
    }
}
