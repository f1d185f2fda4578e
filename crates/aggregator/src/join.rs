//! Join Engine
//!
//! Correlates a server's timetable with its live trains and derives the
//! control status of every station of a line.
//!
//! Documents are read in the order timetable, stations, trains. The first
//! one that cannot be read turns the whole snapshot `Unavailable`.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};
use railside_core::{
    DispatchAssignment, JoinedTrain, LiveTrain, PointId, Snapshot, SnapshotData, Station,
    StationStatus, TimetableEntry,
};
use railside_ports::{DocumentKind, FetchError, SnapshotFetcher};

use crate::status::DispatchIndex;

/// Counters of one join, for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinStats {
    pub entries: usize,
    pub matched: usize,
    pub stations: usize,
    pub staffed: usize,
    pub remote: usize,
}

impl JoinStats {
    pub fn of(data: &SnapshotData) -> Self {
        let count = |status: StationStatus| {
            data.stations.iter().filter(|s| s.status == status).count()
        };

        Self {
            entries: data.trains.len(),
            matched: data.trains.iter().filter(|t| t.is_matched()).count(),
            stations: data.stations.len(),
            staffed: count(StationStatus::User),
            remote: count(StationStatus::Remote),
        }
    }
}

/// Reads a server's documents and joins them
pub struct JoinEngine {
    fetcher: Arc<dyn SnapshotFetcher>,
}

impl JoinEngine {
    pub fn new(fetcher: Arc<dyn SnapshotFetcher>) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &Arc<dyn SnapshotFetcher> {
        &self.fetcher
    }

    /// Join the current documents of `server` against the stations of a line
    ///
    /// `stations` come from [`railside_ports::TopologyStore::stations_for_line`],
    /// remote controllers already attached.
    pub fn join(&self, server: &str, stations: &[Station]) -> Snapshot {
        match self.fetch(server) {
            Ok((timetable, assignments, trains)) => {
                let data = join_documents(server, timetable, &trains, &assignments, stations);
                let stats = JoinStats::of(&data);
                debug!(
                    "Joined {} via {}: {}/{} trains matched, {} stations ({} user, {} remote)",
                    server,
                    self.fetcher.name(),
                    stats.matched,
                    stats.entries,
                    stats.stations,
                    stats.staffed,
                    stats.remote
                );
                Snapshot::Ready(data)
            }
            Err(e) => {
                warn!("Snapshot for {} unavailable: {}", server, e);
                Snapshot::unavailable(failure_reason(server, &e))
            }
        }
    }

    #[allow(clippy::type_complexity)]
    fn fetch(
        &self,
        server: &str,
    ) -> Result<(Vec<TimetableEntry>, Vec<DispatchAssignment>, Vec<LiveTrain>), FetchError> {
        let timetable = self.fetcher.timetable(server)?;
        let stations = self.fetcher.station_dispatch(server)?;
        let trains = self.fetcher.trains(server)?;
        Ok((timetable, stations, trains))
    }
}

/// Join already fetched documents
///
/// Each entry gets the first live train (in `trains` order) with the same
/// number. Entries keep timetable order, stations keep line order.
pub fn join_documents(
    server: &str,
    timetable: Vec<TimetableEntry>,
    trains: &[LiveTrain],
    assignments: &[DispatchAssignment],
    stations: &[Station],
) -> SnapshotData {
    let mut by_number: HashMap<&str, &LiveTrain> = HashMap::with_capacity(trains.len());
    for train in trains {
        by_number
            .entry(train.train_no_local.as_str())
            .or_insert(train);
    }

    let trains = timetable
        .into_iter()
        .map(|entry| {
            let train = by_number.get(entry.train_no_local.as_str()).map(|t| (*t).clone());
            JoinedTrain::new(entry, train)
        })
        .collect();

    let index = DispatchIndex::new(assignments);
    let names: HashMap<PointId, &str> = stations
        .iter()
        .map(|station| (station.id, station.name.as_str()))
        .collect();
    let stations = stations
        .iter()
        .map(|station| {
            let controller = station.controlled_by.and_then(|id| names.get(&id).copied());
            index.view(station, controller)
        })
        .collect();

    SnapshotData {
        server: server.to_string(),
        trains,
        stations,
    }
}

/// Reason shown to clients for a failed document
///
/// Only a missing timetable is reported as a download failure. Every other
/// document failure, missing or malformed, reads "Could not open x file.".
fn failure_reason(server: &str, error: &FetchError) -> String {
    let file = match error.document() {
        DocumentKind::Timetable if !error.is_malformed() => {
            return format!("Timetable for server {} could not be downloaded.", server);
        }
        DocumentKind::Timetable => "timetable",
        DocumentKind::Stations => "stations",
        DocumentKind::Trains => "trains",
        DocumentKind::Servers => "servers",
        DocumentKind::Timezone => "timezones",
    };

    format!("Could not open {} file.", file)
}
