//! End-to-end layout rendering over an in-memory fetcher

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use railside_aggregator::{JoinEngine, LayoutPipeline, SERVER_UNAVAILABLE};
use railside_core::{
    DispatchAssignment, Layout, LineTopology, LiveTrain, Station, StationStatus, TimetableEntry,
};
use railside_fetcher::{InMemorySnapshotFetcher, ServerDocuments};
use railside_ports::{TopologyResult, TopologyStore};
use railside_topology::JsonTopologyStore;
use serde_json::json;

const LAYOUTS: &str = r#"{"data": [
    {"number": 1, "line": 7, "content": {"stations": [{"pointID": 10}, {"pointID": 20}]}},
    {"number": "2", "content": {"stations": [{"pointID": 30}]}}
]}"#;

const LINES: &str = r#"{"data": [
    {
        "id": 3,
        "stations": [{"id": 30, "name": "Charlie"}]
    },
    {
        "id": 7,
        "stations": [
            {"id": 10, "name": "Alpha", "prefix": "A"},
            {"id": 20, "name": "Bravo", "prefix": "B"},
            {"id": 30, "name": "Charlie"}
        ],
        "remote_stations": [{"id": 20, "controlled_by": 10}]
    }
]}"#;

fn setup() -> (InMemorySnapshotFetcher, LayoutPipeline) {
    let _ = env_logger::builder().is_test(true).try_init();

    let topology = JsonTopologyStore::from_json(LAYOUTS, LINES).unwrap();
    let fetcher = InMemorySnapshotFetcher::new();
    let pipeline = LayoutPipeline::new(
        Arc::new(topology),
        JoinEngine::new(Arc::new(fetcher.clone())),
    );
    (fetcher, pipeline)
}

fn documents() -> ServerDocuments {
    ServerDocuments::new(
        vec![
            TimetableEntry::new("100"),
            TimetableEntry::new("200"),
            TimetableEntry::new("300"),
        ],
        vec![
            LiveTrain::new("200", 5, 6),
            LiveTrain::new("100", 20, 99),
            LiveTrain::new("300", 30, 31),
        ],
        vec![
            DispatchAssignment::dispatched("Alpha", "7656"),
            DispatchAssignment::vacant("Bravo"),
        ],
    )
}

#[test]
fn test_layout_snapshot() {
    let (fetcher, pipeline) = setup();
    fetcher.publish("en1", documents());

    let snapshot = pipeline.snapshot("en1", "1").unwrap();

    let numbers: Vec<&str> = snapshot.trains().iter().map(|t| t.train_number()).collect();
    assert_eq!(numbers, vec!["100"]);

    let statuses: Vec<(&str, StationStatus)> = snapshot
        .stations()
        .iter()
        .map(|s| (s.station.name.as_str(), s.status))
        .collect();
    assert_eq!(
        statuses,
        vec![("Alpha", StationStatus::User), ("Bravo", StationStatus::Remote)]
    );
}

#[test]
fn test_layout_without_line_uses_first_line() {
    let (fetcher, pipeline) = setup();
    fetcher.publish("en1", documents());

    let snapshot = pipeline.snapshot("en1", "2").unwrap();

    assert_eq!(snapshot.stations().len(), 1);
    assert_eq!(snapshot.stations()[0].status, StationStatus::Bot);
    assert_eq!(snapshot.trains()[0].train_number(), "300");
}

#[test]
fn test_missing_documents_render_server_unavailable() {
    let (_fetcher, pipeline) = setup();

    let response = pipeline.response("en1", "1").unwrap();

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"error": SERVER_UNAVAILABLE, "data": {"t": [], "s": []}})
    );
}

#[test]
fn test_unknown_layout_is_not_found() {
    let (fetcher, pipeline) = setup();
    fetcher.publish("en1", documents());

    let err = pipeline.snapshot("en1", "99").unwrap_err();
    assert!(err.is_not_found());
    assert!(pipeline.layout("99").is_err());
    assert!(pipeline.layout("1").is_ok());
}

#[test]
fn test_response_wire_shape() {
    let (fetcher, pipeline) = setup();
    fetcher.publish("en1", documents());

    let value = serde_json::to_value(pipeline.response("en1", "1").unwrap()).unwrap();

    assert_eq!(value["error"], json!(null));
    assert_eq!(value["data"]["t"][0]["trainNoLocal"], "100");
    assert_eq!(value["data"]["t"][0]["trainObject"]["tpl_next"], 20);
    assert_eq!(
        value["data"]["s"][1],
        json!({"Name": "Bravo", "id": 20, "status": "remote", "dispatched_by": ""})
    );
}

/// Serves the JSON topology but hands Bravo over to a different controller
struct HandedOver {
    inner: JsonTopologyStore,
    station_lookups: AtomicUsize,
}

impl TopologyStore for HandedOver {
    fn layouts(&self) -> &[Layout] {
        self.inner.layouts()
    }

    fn layout(&self, number: &str) -> TopologyResult<&Layout> {
        self.inner.layout(number)
    }

    fn line_for_layout(&self, number: &str) -> TopologyResult<&LineTopology> {
        self.inner.line_for_layout(number)
    }

    fn stations_for_line(&self, line: &LineTopology) -> Vec<Station> {
        self.station_lookups.fetch_add(1, Ordering::SeqCst);
        let mut stations = self.inner.stations_for_line(line);
        for station in &mut stations {
            if station.id == 20 {
                station.controlled_by = Some(30);
            }
        }
        stations
    }
}

#[test]
fn test_stations_come_from_topology_store() {
    let topology = Arc::new(HandedOver {
        inner: JsonTopologyStore::from_json(LAYOUTS, LINES).unwrap(),
        station_lookups: AtomicUsize::new(0),
    });
    let fetcher = InMemorySnapshotFetcher::new();
    let pipeline = LayoutPipeline::new(
        topology.clone(),
        JoinEngine::new(Arc::new(fetcher.clone())),
    );

    fetcher.publish("en1", documents());

    let snapshot = pipeline.snapshot("en1", "1").unwrap();

    assert_eq!(topology.station_lookups.load(Ordering::SeqCst), 1);
    // Charlie has no dispatcher, so Bravo is no longer covered by Alpha
    let bravo = &snapshot.stations()[1];
    assert_eq!(bravo.station.name, "Bravo");
    assert_eq!(bravo.station.controlled_by, Some(30));
    assert_eq!(bravo.status, StationStatus::Bot);
}
