//! Joined per-server view of trains and stations

use std::collections::HashSet;

use crate::entities::{LiveTrain, Station, StationStatus, TimetableEntry};
use crate::values::{DispatcherId, PointId, ServerCode};

/// A timetable entry with its live train, if one reported the same number
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedTrain {
    pub entry: TimetableEntry,
    pub train: Option<LiveTrain>,
}

impl JoinedTrain {
    pub fn new(entry: TimetableEntry, train: Option<LiveTrain>) -> Self {
        Self { entry, train }
    }

    pub fn train_number(&self) -> &str {
        &self.entry.train_no_local
    }

    pub fn is_matched(&self) -> bool {
        self.train.is_some()
    }

    /// Returns false for entries without a live train
    pub fn is_adjacent_to(&self, points: &HashSet<PointId>) -> bool {
        self.train
            .as_ref()
            .is_some_and(|train| train.is_adjacent_to(points))
    }
}

/// A station with its derived control status
#[derive(Debug, Clone, PartialEq)]
pub struct StationView {
    pub station: Station,
    pub status: StationStatus,
    /// Dispatcher assigned directly to this station
    pub dispatched_by: Option<DispatcherId>,
}

/// Result of a successful join
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotData {
    pub server: ServerCode,
    /// Timetable (fetch) order
    pub trains: Vec<JoinedTrain>,
    /// Topology order
    pub stations: Vec<StationView>,
}

/// Per-server snapshot
///
/// A missing upstream document degrades the snapshot to `Unavailable` instead
/// of failing the request. Callers must match on the variant before reading
/// any data.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Ready(SnapshotData),
    Unavailable { reason: String },
}

impl Snapshot {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Snapshot::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Snapshot::Ready(_))
    }

    pub fn data(&self) -> Option<&SnapshotData> {
        match self {
            Snapshot::Ready(data) => Some(data),
            Snapshot::Unavailable { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Snapshot::Ready(_) => None,
            Snapshot::Unavailable { reason } => Some(reason),
        }
    }

    /// Joined trains; empty when unavailable
    pub fn trains(&self) -> &[JoinedTrain] {
        self.data().map(|d| d.trains.as_slice()).unwrap_or_default()
    }

    /// Stations; empty when unavailable
    pub fn stations(&self) -> &[StationView] {
        self.data().map(|d| d.stations.as_slice()).unwrap_or_default()
    }
}
