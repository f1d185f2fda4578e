use serde::{Deserialize, Serialize};

use crate::values::PointId;

/// A station of a line, with its remote-control relation resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: PointId,
    pub name: String,
    /// Short code used in signal names (e.g. `WSD`)
    pub prefix: Option<String>,
    /// Station whose dispatcher operates this one, if any
    pub controlled_by: Option<PointId>,
}

impl Station {
    pub fn new(id: PointId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            prefix: None,
            controlled_by: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_controller(mut self, controller: PointId) -> Self {
        self.controlled_by = Some(controller);
        self
    }

    pub fn is_remotely_controlled(&self) -> bool {
        self.controlled_by.is_some()
    }
}
