use serde::{Deserialize, Serialize};

/// Who currently operates a station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    /// No human dispatcher anywhere in the control chain
    Bot,
    /// A human dispatcher is assigned directly to the station
    User,
    /// Operated by the dispatcher of the station's remote controller
    Remote,
}

impl StationStatus {
    /// Returns true if a human is operating the station, directly or remotely
    pub fn is_staffed(&self) -> bool {
        matches!(self, StationStatus::User | StationStatus::Remote)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StationStatus::Bot => "bot",
            StationStatus::User => "user",
            StationStatus::Remote => "remote",
        }
    }
}
