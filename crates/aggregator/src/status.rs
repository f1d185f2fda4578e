//! Station Status Derivation
//!
//! A station is exactly one of:
//! - `user`: a human dispatcher is assigned to the station itself
//! - `remote`: no direct dispatcher, but the station's remote controller
//!   has one
//! - `bot`: nobody in the control chain
//!
//! Direct assignment always wins over the remote relation.

use std::collections::HashMap;

use railside_core::{DispatchAssignment, Station, StationStatus, StationView};

/// Station status from the direct and the controlling station's dispatcher
pub fn derive_status(direct: Option<&str>, controller: Option<&str>) -> StationStatus {
    match (direct, controller) {
        (Some(_), _) => StationStatus::User,
        (None, Some(_)) => StationStatus::Remote,
        (None, None) => StationStatus::Bot,
    }
}

/// Station name -> dispatcher of the first assignment with that name
#[derive(Debug, Clone, Default)]
pub struct DispatchIndex {
    dispatchers: HashMap<String, Option<String>>,
}

impl DispatchIndex {
    pub fn new(assignments: &[DispatchAssignment]) -> Self {
        let mut dispatchers = HashMap::with_capacity(assignments.len());
        for assignment in assignments {
            dispatchers
                .entry(assignment.station_name.clone())
                .or_insert_with(|| assignment.dispatcher().map(str::to_string));
        }
        Self { dispatchers }
    }

    /// Dispatcher of a station; `None` when unassigned or unknown
    pub fn dispatcher(&self, station_name: &str) -> Option<&str> {
        self.dispatchers.get(station_name)?.as_deref()
    }

    /// Build the view of one station
    ///
    /// `controller_name` is the name of the station that remotely controls
    /// this one, if any.
    pub fn view(&self, station: &Station, controller_name: Option<&str>) -> StationView {
        let direct = self.dispatcher(&station.name);
        let controller = controller_name.and_then(|name| self.dispatcher(name));

        StationView {
            status: derive_status(direct, controller),
            dispatched_by: direct.map(str::to_string),
            station: station.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.dispatchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dispatchers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railside_core::{LineStation, LineTopology, RemoteStation};

    fn line() -> LineTopology {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "stations": [
                {"id": 1, "name": "Alpha"},
                {"id": 2, "name": "Bravo"},
                {"id": 3, "name": "Charlie"}
            ],
            "remote_stations": [
                {"id": 2, "controlled_by": 1},
                {"id": 3, "controlled_by": 2}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_status_precedence() {
        assert_eq!(derive_status(Some("a"), Some("b")), StationStatus::User);
        assert_eq!(derive_status(Some("a"), None), StationStatus::User);
        assert_eq!(derive_status(None, Some("b")), StationStatus::Remote);
        assert_eq!(derive_status(None, None), StationStatus::Bot);
    }

    #[test]
    fn test_direct_dispatcher_wins_over_remote() {
        let line = line();
        let index = DispatchIndex::new(&[
            DispatchAssignment::dispatched("Alpha", "100"),
            DispatchAssignment::dispatched("Bravo", "200"),
        ]);

        let bravo = index.view(&line.stations()[1], Some("Alpha"));
        assert_eq!(bravo.status, StationStatus::User);
        assert_eq!(bravo.dispatched_by.as_deref(), Some("200"));
    }

    #[test]
    fn test_remote_only_one_hop() {
        let line = line();
        let index = DispatchIndex::new(&[DispatchAssignment::dispatched("Alpha", "100")]);
        let stations = line.stations();

        let controller = |s: &Station| s.controlled_by.and_then(|id| line.station_name(id));

        let bravo = index.view(&stations[1], controller(&stations[1]));
        assert_eq!(bravo.status, StationStatus::Remote);
        assert_eq!(bravo.dispatched_by, None);

        // Charlie is controlled by Bravo, which has no dispatcher of its own
        let charlie = index.view(&stations[2], controller(&stations[2]));
        assert_eq!(charlie.status, StationStatus::Bot);
    }

    #[test]
    fn test_empty_steam_id_is_no_dispatcher() {
        let line = LineTopology {
            id: None,
            name: None,
            stations: vec![LineStation {
                id: 7,
                name: "Delta".to_string(),
                prefix: None,
            }],
            remote_stations: vec![RemoteStation {
                id: 7,
                controlled_by: 8,
            }],
            signal_rules: vec![],
            entrance_signals: vec![],
            lines: vec![],
        };
        let index = DispatchIndex::new(&[DispatchAssignment::dispatched("Delta", "")]);

        let stations = line.stations();
        let delta = &stations[0];
        let view = index.view(delta, delta.controlled_by.and_then(|id| line.station_name(id)));
        assert_eq!(view.status, StationStatus::Bot);
    }

    #[test]
    fn test_first_assignment_per_name_wins() {
        let index = DispatchIndex::new(&[
            DispatchAssignment::vacant("Alpha"),
            DispatchAssignment::dispatched("Alpha", "100"),
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.dispatcher("Alpha"), None);
        assert_eq!(index.dispatcher("Unknown"), None);
    }
}
