//! Layout filter

use std::collections::HashSet;

use log::debug;
use railside_core::{PointId, Snapshot, SnapshotData};

/// Reason of every filtered unavailable snapshot
pub const SERVER_UNAVAILABLE: &str = "Server unavailable";

/// Narrow a snapshot to the stations in `included`
///
/// Keeps trains whose live train is next to or just past an included point,
/// and included stations, both in input order. Timetable entries without a
/// live train are dropped. An unavailable snapshot stays unavailable with a
/// generic reason.
pub fn filter(snapshot: &Snapshot, included: &HashSet<PointId>) -> Snapshot {
    let data = match snapshot {
        Snapshot::Ready(data) => data,
        Snapshot::Unavailable { .. } => return Snapshot::unavailable(SERVER_UNAVAILABLE),
    };

    let trains: Vec<_> = data
        .trains
        .iter()
        .filter(|t| t.is_adjacent_to(included))
        .cloned()
        .collect();
    let stations: Vec<_> = data
        .stations
        .iter()
        .filter(|s| included.contains(&s.station.id))
        .cloned()
        .collect();

    debug!(
        "Filtered {}: {}/{} trains, {}/{} stations",
        data.server,
        trains.len(),
        data.trains.len(),
        stations.len(),
        data.stations.len()
    );

    Snapshot::Ready(SnapshotData {
        server: data.server.clone(),
        trains,
        stations,
    })
}
