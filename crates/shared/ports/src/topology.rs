use std::collections::{HashMap, HashSet};

use railside_core::{Layout, LineTopology, PointId, Station};

use crate::error::TopologyResult;

/// Port for the static rail-network topology
///
/// Read-only; implementations load their documents once and answer every
/// lookup from memory.
pub trait TopologyStore: Send + Sync {
    /// All known layouts, in document order
    fn layouts(&self) -> &[Layout];

    /// Layout answering to `number`
    fn layout(&self, number: &str) -> TopologyResult<&Layout>;

    /// Line document the layout belongs to
    fn line_for_layout(&self, number: &str) -> TopologyResult<&LineTopology>;

    /// Point ids of the layout's stations
    fn included_station_ids(&self, number: &str) -> TopologyResult<HashSet<PointId>> {
        Ok(self.layout(number)?.included_station_ids())
    }

    /// Stations of a line in declared order
    fn stations_for_line(&self, line: &LineTopology) -> Vec<Station> {
        line.stations()
    }

    /// Controlled station id -> controller station id
    fn remote_control_map(&self, line: &LineTopology) -> HashMap<PointId, PointId> {
        line.remote_control_map()
    }

    /// Get the store's name/identifier for debugging
    fn name(&self) -> &str {
        "TopologyStore"
    }
}
