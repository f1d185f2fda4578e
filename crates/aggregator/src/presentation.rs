//! Wire response
//!
//! ```json
//! {
//!   "error": null,
//!   "data": {
//!     "t": [{"trainNoLocal": "14001", ..., "trainObject": {...} | null}],
//!     "s": [{"Name": "Katowice", "id": 3991, "status": "user", "dispatched_by": "7656"}]
//!   }
//! }
//! ```

use railside_core::{JoinedTrain, LiveTrain, PointId, Snapshot, StationStatus, StationView, TimetableEntry};
use serde::Serialize;

/// Response body for one server and layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotResponse {
    pub error: Option<String>,
    pub data: ResponseData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResponseData {
    pub t: Vec<TrainRecord>,
    pub s: Vec<StationRecord>,
}

/// Timetable entry fields plus the joined live train
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainRecord {
    #[serde(flatten)]
    pub entry: TimetableEntry,
    #[serde(rename = "trainObject")]
    pub train_object: Option<LiveTrain>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationRecord {
    #[serde(rename = "Name")]
    pub name: String,
    pub id: PointId,
    pub status: StationStatus,
    /// Direct dispatcher, empty when none
    pub dispatched_by: String,
}

impl From<&JoinedTrain> for TrainRecord {
    fn from(train: &JoinedTrain) -> Self {
        Self {
            entry: train.entry.clone(),
            train_object: train.train.clone(),
        }
    }
}

impl From<&StationView> for StationRecord {
    fn from(view: &StationView) -> Self {
        Self {
            name: view.station.name.clone(),
            id: view.station.id,
            status: view.status,
            dispatched_by: view.dispatched_by.clone().unwrap_or_default(),
        }
    }
}

impl From<&Snapshot> for SnapshotResponse {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            error: snapshot.error().map(str::to_string),
            data: ResponseData {
                t: snapshot.trains().iter().map(TrainRecord::from).collect(),
                s: snapshot.stations().iter().map(StationRecord::from).collect(),
            },
        }
    }
}

impl SnapshotResponse {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
