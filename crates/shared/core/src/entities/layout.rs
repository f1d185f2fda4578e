use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::values::{PointId, RawId, deserialize_point_id};

/// A numbered subsection of the network shown to viewers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub number: RawId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Id of the line document this layout belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<RawId>,
    pub content: LayoutContent,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutContent {
    pub stations: Vec<LayoutStation>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutStation {
    #[serde(rename = "pointID", deserialize_with = "deserialize_point_id")]
    pub point_id: PointId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Layout {
    pub fn new(number: &str, point_ids: impl IntoIterator<Item = PointId>) -> Self {
        Self {
            number: RawId::parse(number),
            name: None,
            line: None,
            content: LayoutContent {
                stations: point_ids
                    .into_iter()
                    .map(|point_id| LayoutStation {
                        point_id,
                        extra: Map::new(),
                    })
                    .collect(),
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_line(mut self, line: &str) -> Self {
        self.line = Some(RawId::parse(line));
        self
    }

    /// Returns true if this layout answers to `number` (`"3"` matches `3`)
    pub fn matches(&self, number: &str) -> bool {
        self.number == RawId::parse(number)
    }

    /// Point ids of the stations in this layout, in declared order
    pub fn station_ids(&self) -> Vec<PointId> {
        self.content.stations.iter().map(|s| s.point_id).collect()
    }

    /// Membership set used to filter snapshots
    pub fn included_station_ids(&self) -> HashSet<PointId> {
        self.content.stations.iter().map(|s| s.point_id).collect()
    }
}
