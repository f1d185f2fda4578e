use serde::{Deserialize, Serialize};

use crate::values::deserialize_null_as_empty;

/// One entry of a station's `DispatchedBy` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatcherRef {
    #[serde(rename = "SteamId", default)]
    pub steam_id: String,
}

impl DispatcherRef {
    pub fn new(steam_id: impl Into<String>) -> Self {
        Self {
            steam_id: steam_id.into(),
        }
    }
}

/// Dispatch state of one station as reported by the game server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchAssignment {
    #[serde(rename = "Name")]
    pub station_name: String,
    #[serde(rename = "Prefix", default)]
    pub prefix: Option<String>,
    #[serde(
        rename = "DispatchedBy",
        default,
        deserialize_with = "deserialize_null_as_empty"
    )]
    pub dispatched_by: Vec<DispatcherRef>,
}

impl DispatchAssignment {
    /// Station without a dispatcher
    pub fn vacant(station_name: impl Into<String>) -> Self {
        Self {
            station_name: station_name.into(),
            prefix: None,
            dispatched_by: Vec::new(),
        }
    }

    /// Station with a single dispatcher
    pub fn dispatched(station_name: impl Into<String>, steam_id: impl Into<String>) -> Self {
        Self {
            station_name: station_name.into(),
            prefix: None,
            dispatched_by: vec![DispatcherRef::new(steam_id)],
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// The dispatcher operating the station
    ///
    /// Only the first `DispatchedBy` entry counts; an empty id is the same as
    /// no entry at all.
    pub fn dispatcher(&self) -> Option<&str> {
        self.dispatched_by
            .first()
            .map(|d| d.steam_id.as_str())
            .filter(|id| !id.is_empty())
    }
}
