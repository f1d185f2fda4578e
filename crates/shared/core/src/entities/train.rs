use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::signals::signal_base_name;
use crate::values::{PointId, TrainNumber, deserialize_point_id, deserialize_train_number};

/// Live telemetry of one train
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveTrain {
    #[serde(rename = "TrainNoLocal", deserialize_with = "deserialize_train_number")]
    pub train_no_local: TrainNumber,
    #[serde(rename = "TrainName", default, skip_serializing_if = "Option::is_none")]
    pub train_name: Option<String>,
    #[serde(rename = "ServerCode", default, skip_serializing_if = "Option::is_none")]
    pub server_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Next topology point on the train's path
    #[serde(deserialize_with = "deserialize_point_id")]
    pub tpl_next: PointId,
    /// Last topology point the train passed
    #[serde(deserialize_with = "deserialize_point_id")]
    pub tpl_last: PointId,
    #[serde(rename = "TrainData", default, skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<TrainTelemetry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LiveTrain {
    pub fn new(train_no_local: impl Into<TrainNumber>, tpl_next: PointId, tpl_last: PointId) -> Self {
        Self {
            train_no_local: train_no_local.into(),
            train_name: None,
            server_code: None,
            id: None,
            tpl_next,
            tpl_last,
            telemetry: None,
            extra: Map::new(),
        }
    }

    pub fn with_telemetry(mut self, telemetry: TrainTelemetry) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Returns true if the next or the last point is one of `points`
    pub fn is_adjacent_to(&self, points: &HashSet<PointId>) -> bool {
        points.contains(&self.tpl_next) || points.contains(&self.tpl_last)
    }

    /// Current (latitude, longitude), when reported
    pub fn position(&self) -> Option<(f64, f64)> {
        let telemetry = self.telemetry.as_ref()?;
        Some((telemetry.latitude?, telemetry.longitude?))
    }

    /// Base name of the signal ahead of the train
    pub fn signal_ahead(&self) -> Option<&str> {
        self.telemetry
            .as_ref()?
            .signal_in_front
            .as_deref()
            .map(signal_base_name)
            .filter(|name| !name.is_empty())
    }

    /// Returns true if a player is driving the train
    pub fn is_player_driven(&self) -> bool {
        self.telemetry
            .as_ref()
            .and_then(|t| t.controlled_by.as_deref())
            .is_some_and(|id| !id.is_empty())
    }
}

/// `TrainData` block of a live train
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainTelemetry {
    // The upstream API spells these two keys this way
    #[serde(
        rename = "Latititute",
        alias = "Latitude",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub latitude: Option<f64>,
    #[serde(
        rename = "Longitute",
        alias = "Longitude",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub longitude: Option<f64>,
    #[serde(rename = "Velocity", default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<f64>,
    #[serde(rename = "SignalInFront", default, skip_serializing_if = "Option::is_none")]
    pub signal_in_front: Option<String>,
    #[serde(
        rename = "DistanceToSignalInFront",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub distance_to_signal_in_front: Option<f64>,
    #[serde(
        rename = "ControlledBySteamID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub controlled_by: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
