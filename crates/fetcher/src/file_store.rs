use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::debug;
use railside_core::{DataEnvelope, DispatchAssignment, LiveTrain, TimetableEntry, timezone_name};
use railside_ports::{DocumentKind, FetchResult, SnapshotFetcher};
use serde::de::DeserializeOwned;

use crate::document::{read_document, validate_server_code};

/// Reads the documents the upstream poller caches on disk
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `{dir}/{server}.{kind}.json`
    pub fn document_path(&self, server: &str, document: DocumentKind) -> PathBuf {
        self.dir
            .join(format!("{}.{}.json", server, document.file_suffix()))
    }

    fn read<T: DeserializeOwned>(&self, server: &str, document: DocumentKind) -> FetchResult<T> {
        validate_server_code(server, document)?;
        read_document(&self.document_path(server, document), document, server)
    }

    /// IANA zone of the server's clock, `UTC` when unknown
    pub fn timezone(&self, server: &str) -> String {
        match self.read::<i32>(server, DocumentKind::Timezone) {
            Ok(offset) => timezone_name(offset),
            Err(e) => {
                debug!("No timezone for server {}, using UTC: {}", server, e);
                "UTC".to_string()
            }
        }
    }

    /// Station name -> signal prefix, for stations that report one
    pub fn station_prefixes(&self, server: &str) -> FetchResult<HashMap<String, String>> {
        Ok(self
            .station_dispatch(server)?
            .into_iter()
            .filter_map(|s| s.prefix.map(|prefix| (s.station_name, prefix)))
            .collect())
    }
}

impl SnapshotFetcher for FileSnapshotStore {
    fn timetable(&self, server: &str) -> FetchResult<Vec<TimetableEntry>> {
        // The timetable is cached as a bare array
        self.read(server, DocumentKind::Timetable)
    }

    fn trains(&self, server: &str) -> FetchResult<Vec<LiveTrain>> {
        self.read::<DataEnvelope<LiveTrain>>(server, DocumentKind::Trains)
            .map(DataEnvelope::into_inner)
    }

    fn station_dispatch(&self, server: &str) -> FetchResult<Vec<DispatchAssignment>> {
        self.read::<DataEnvelope<DispatchAssignment>>(server, DocumentKind::Stations)
            .map(DataEnvelope::into_inner)
    }

    fn name(&self) -> &str {
        "FileSnapshotStore"
    }
}
