use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use railside_core::{DataEnvelope, Layout, LineTopology, PointId, Station};
use railside_ports::{TopologyError, TopologyResult, TopologyStore};
use serde::de::DeserializeOwned;

/// Topology store holding parsed layout and line documents
///
/// The remote-control map and station list of every line are derived once,
/// when the store is built.
#[derive(Debug, Clone, Default)]
pub struct JsonTopologyStore {
    layouts: Vec<Layout>,
    lines: Vec<LineTopology>,
    derived: Vec<DerivedLine>,
}

/// Per-line data derived at load, parallel to `lines`
#[derive(Debug, Clone, Default)]
struct DerivedLine {
    remote_control: HashMap<PointId, PointId>,
    stations: Vec<Station>,
}

impl JsonTopologyStore {
    pub fn new(layouts: Vec<Layout>, lines: Vec<LineTopology>) -> Self {
        let derived = lines
            .iter()
            .map(|line| {
                validate_line(line);
                let remote_control = line.remote_control_map();
                DerivedLine {
                    stations: line.stations_with(&remote_control),
                    remote_control,
                }
            })
            .collect();

        Self {
            layouts,
            lines,
            derived,
        }
    }

    /// Parse both documents from JSON strings
    pub fn from_json(layouts_json: &str, lines_json: &str) -> TopologyResult<Self> {
        let layouts = parse_document::<Layout>("layouts", layouts_json)?;
        let lines = parse_document::<LineTopology>("lines", lines_json)?;

        Ok(Self::new(layouts, lines))
    }

    /// Load both documents from disk
    pub fn from_files(
        layouts_path: impl AsRef<Path>,
        lines_path: impl AsRef<Path>,
    ) -> TopologyResult<Self> {
        let layouts_path = layouts_path.as_ref();
        let lines_path = lines_path.as_ref();

        let layouts = parse_document::<Layout>(
            &layouts_path.display().to_string(),
            &read_document(layouts_path)?,
        )?;
        let lines = parse_document::<LineTopology>(
            &lines_path.display().to_string(),
            &read_document(lines_path)?,
        )?;

        info!(
            "Loaded {} layouts from {} and {} lines from {}",
            layouts.len(),
            layouts_path.display(),
            lines.len(),
            lines_path.display()
        );

        Ok(Self::new(layouts, lines))
    }

    pub fn lines(&self) -> &[LineTopology] {
        &self.lines
    }

    /// Derived data of a line handed out by this store
    fn derived(&self, line: &LineTopology) -> Option<&DerivedLine> {
        let index = self
            .lines
            .iter()
            .position(|candidate| std::ptr::eq(candidate, line))?;
        self.derived.get(index)
    }
}

impl TopologyStore for JsonTopologyStore {
    fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    fn layout(&self, number: &str) -> TopologyResult<&Layout> {
        self.layouts
            .iter()
            .find(|layout| layout.matches(number))
            .ok_or_else(|| TopologyError::LayoutNotFound(number.to_string()))
    }

    fn line_for_layout(&self, number: &str) -> TopologyResult<&LineTopology> {
        let layout = self.layout(number)?;

        // Layouts that do not name a line belong to the first one
        let line = match &layout.line {
            Some(line_id) => self
                .lines
                .iter()
                .find(|line| line.id.as_ref() == Some(line_id)),
            None => self.lines.first(),
        };

        line.ok_or_else(|| TopologyError::LineNotFound(number.to_string()))
    }

    fn stations_for_line(&self, line: &LineTopology) -> Vec<Station> {
        match self.derived(line) {
            Some(derived) => derived.stations.clone(),
            None => line.stations(),
        }
    }

    fn remote_control_map(&self, line: &LineTopology) -> HashMap<PointId, PointId> {
        match self.derived(line) {
            Some(derived) => derived.remote_control.clone(),
            None => line.remote_control_map(),
        }
    }

    fn name(&self) -> &str {
        "JsonTopologyStore"
    }
}

fn read_document(path: &Path) -> TopologyResult<String> {
    fs::read_to_string(path).map_err(|e| TopologyError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn parse_document<T: DeserializeOwned>(path: &str, json: &str) -> TopologyResult<Vec<T>> {
    serde_json::from_str::<DataEnvelope<T>>(json)
        .map(DataEnvelope::into_inner)
        .map_err(|e| TopologyError::Malformed {
            path: path.to_string(),
            reason: e.to_string(),
        })
}

/// Warn about remote-control entries the store will not honour
fn validate_line(line: &LineTopology) {
    let label = line
        .name
        .clone()
        .or_else(|| line.id.as_ref().map(ToString::to_string))
        .unwrap_or_else(|| "<unnamed>".to_string());

    let mut seen = HashSet::new();
    for remote in &line.remote_stations {
        if !seen.insert(remote.id) {
            warn!(
                "Line {}: station {} has more than one remote controller, keeping the first",
                label, remote.id
            );
        }
        if line.station_name(remote.controlled_by).is_none() {
            warn!(
                "Line {}: station {} is controlled by unknown station {}",
                label, remote.id, remote.controlled_by
            );
        }
    }

    debug!(
        "Line {}: {} stations, {} remote-controlled",
        label,
        line.stations.len(),
        seen.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn layouts_json() -> String {
        json!({"data": [
            {"number": 1, "name": "North", "content": {"stations": [{"pointID": 100}, {"pointID": 200}]}},
            {"number": "2", "name": "South", "line": 20, "content": {"stations": [{"pointID": "900"}]}},
            {"number": 3, "line": 99, "content": {"stations": []}}
        ]})
        .to_string()
    }

    fn lines_json() -> String {
        json!({"data": [
            {
                "id": 10,
                "stations": [{"id": 100, "name": "A"}, {"id": 200, "name": "B"}, {"id": 300, "name": "C"}],
                "remote_stations": [{"id": 300, "controlled_by": 200}]
            },
            {
                "id": 20,
                "stations": [{"id": 900, "name": "Z"}]
            }
        ]})
        .to_string()
    }

    fn store() -> JsonTopologyStore {
        JsonTopologyStore::from_json(&layouts_json(), &lines_json()).unwrap()
    }

    #[test]
    fn test_included_station_ids() {
        let store = store();

        let ids = store.included_station_ids("1").unwrap();
        assert_eq!(ids, [100, 200].into_iter().collect());

        // String-encoded number and point id
        let ids = store.included_station_ids("2").unwrap();
        assert_eq!(ids, [900].into_iter().collect());
    }

    #[test]
    fn test_unknown_layout_is_not_found() {
        let err = store().included_station_ids("42").unwrap_err();
        assert_eq!(err, TopologyError::LayoutNotFound("42".to_string()));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_line_for_layout() {
        let store = store();

        // No explicit line: first document
        let line = store.line_for_layout("1").unwrap();
        assert_eq!(line.stations.len(), 3);

        // Explicit line id
        let line = store.line_for_layout("2").unwrap();
        assert_eq!(line.stations[0].name, "Z");

        // Explicit but unknown line id
        let err = store.line_for_layout("3").unwrap_err();
        assert_eq!(err, TopologyError::LineNotFound("3".to_string()));
    }

    #[test]
    fn test_stations_and_remote_map_through_port() {
        let store = store();
        let line = store.line_for_layout("1").unwrap();

        let stations = store.stations_for_line(line);
        assert_eq!(
            stations.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
        assert_eq!(stations[2].controlled_by, Some(200));

        let map = store.remote_control_map(line);
        assert_eq!(map.get(&300), Some(&200));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_derived_data_is_held_per_line() {
        let store = store();
        assert_eq!(store.derived.len(), store.lines().len());

        let line = store.line_for_layout("1").unwrap();
        let derived = store.derived(line).unwrap();
        assert_eq!(derived.remote_control.get(&300), Some(&200));
        assert_eq!(store.stations_for_line(line), derived.stations);

        let south = store.line_for_layout("2").unwrap();
        assert!(store.derived(south).unwrap().remote_control.is_empty());

        // A line the store did not load is derived on the spot
        let mut foreign = line.clone();
        foreign.remote_stations.clear();
        assert!(store.derived(&foreign).is_none());
        assert!(store.remote_control_map(&foreign).is_empty());
        assert_eq!(store.stations_for_line(&foreign)[2].controlled_by, None);
    }

    #[test]
    fn test_layout_document_lookup() {
        let store = store();
        let layout = store.layout("2").unwrap();

        assert_eq!(layout.name.as_deref(), Some("South"));
        assert_eq!(store.layouts().len(), 3);
    }

    #[test]
    fn test_malformed_document() {
        let bad_layouts = json!({"data": [{"number": 1}]}).to_string();
        let err = JsonTopologyStore::from_json(&bad_layouts, &lines_json()).unwrap_err();

        match err {
            TopologyError::Malformed { path, reason } => {
                assert_eq!(path, "layouts");
                assert!(reason.contains("content"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
