//! Railside Core Domain
//!
//! Pure domain types for the Railside telemetry aggregator.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod signals;
pub mod snapshot;
pub mod time;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    // Topology documents
    EntranceSignal,
    Layout,
    LayoutContent,
    LayoutStation,
    LineStation,
    LineTopology,
    RemoteStation,
    SignalRule,
    TrackSegment,
    // Live documents
    DispatchAssignment,
    DispatcherRef,
    LiveTrain,
    ServerInfo,
    TimetableEntry,
    TimetableStop,
    TrainTelemetry,
    // Derived
    Station,
    StationStatus,
};
pub use signals::{derive_signal_name, signal_base_name, signal_matches_station};
pub use snapshot::{JoinedTrain, Snapshot, SnapshotData, StationView};
pub use time::{delay_minutes, timezone_name};
pub use values::{DataEnvelope, DispatcherId, PointId, RawId, ServerCode, TrainNumber};
