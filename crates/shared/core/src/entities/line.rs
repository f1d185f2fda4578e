use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Station;
use crate::signals::{derive_signal_name, signal_base_name};
use crate::values::{PointId, RawId, deserialize_opt_point_id, deserialize_point_id};

/// Static description of one rail line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTopology {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RawId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub stations: Vec<LineStation>,
    #[serde(default)]
    pub remote_stations: Vec<RemoteStation>,
    #[serde(default)]
    pub signal_rules: Vec<SignalRule>,
    #[serde(default)]
    pub entrance_signals: Vec<EntranceSignal>,
    /// Track segments between points
    #[serde(default)]
    pub lines: Vec<TrackSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStation {
    #[serde(deserialize_with = "deserialize_point_id")]
    pub id: PointId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// `id` is operated by the dispatcher of `controlled_by`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteStation {
    #[serde(deserialize_with = "deserialize_point_id")]
    pub id: PointId,
    #[serde(deserialize_with = "deserialize_point_id")]
    pub controlled_by: PointId,
}

/// How the signals of a block are named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalRule {
    #[serde(default)]
    pub prefix: String,
    pub block: RawId,
    pub track_direction: String,
    pub signal_direction: String,
    #[serde(
        default,
        deserialize_with = "deserialize_opt_point_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub station: Option<PointId>,
}

impl SignalRule {
    pub fn signal_name(&self) -> String {
        derive_signal_name(
            &self.prefix,
            &self.block.to_string(),
            &self.track_direction,
            &self.signal_direction,
        )
    }
}

/// Signal a train passes when entering a station area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntranceSignal {
    #[serde(alias = "station_id", deserialize_with = "deserialize_point_id")]
    pub station: PointId,
    pub signal: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSegment {
    #[serde(rename = "point_A", deserialize_with = "deserialize_point_id")]
    pub point_a: PointId,
    #[serde(rename = "point_B", deserialize_with = "deserialize_point_id")]
    pub point_b: PointId,
}

impl TrackSegment {
    pub fn touches(&self, point: PointId) -> bool {
        self.point_a == point || self.point_b == point
    }
}

impl LineTopology {
    /// Controlled station id -> controller station id
    ///
    /// A station has at most one controller; if the document lists more than
    /// one, the first entry wins.
    pub fn remote_control_map(&self) -> HashMap<PointId, PointId> {
        let mut map = HashMap::with_capacity(self.remote_stations.len());
        for remote in &self.remote_stations {
            map.entry(remote.id).or_insert(remote.controlled_by);
        }
        map
    }

    /// Stations in declared order, with their remote controllers attached
    pub fn stations(&self) -> Vec<Station> {
        self.stations_with(&self.remote_control_map())
    }

    /// Like [`LineTopology::stations`], with an already derived control map
    pub fn stations_with(&self, remote: &HashMap<PointId, PointId>) -> Vec<Station> {
        self.stations
            .iter()
            .map(|s| Station {
                id: s.id,
                name: s.name.clone(),
                prefix: s.prefix.clone(),
                controlled_by: remote.get(&s.id).copied(),
            })
            .collect()
    }

    pub fn station_name(&self, id: PointId) -> Option<&str> {
        self.stations
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.as_str())
    }

    /// Base names of the entrance signals of a station
    pub fn entrance_signals_for(&self, station: PointId) -> Vec<String> {
        self.entrance_signals
            .iter()
            .filter(|e| e.station == station)
            .map(|e| signal_base_name(&e.signal).to_string())
            .collect()
    }

    /// Signal names produced by the rules of a station
    pub fn signal_names_for(&self, station: PointId) -> Vec<String> {
        self.signal_rules
            .iter()
            .filter(|rule| rule.station == Some(station))
            .map(SignalRule::signal_name)
            .collect()
    }

    /// Returns true if either point is an endpoint of one of the line's segments
    pub fn touches_segment(&self, current: PointId, previous: PointId) -> bool {
        self.lines
            .iter()
            .any(|segment| segment.touches(current) || segment.touches(previous))
    }
}
