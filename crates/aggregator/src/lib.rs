//! Railside Aggregator
//!
//! Turns the raw upstream documents of one game server into the view a
//! layout viewer needs:
//! - **Join**: attaches each timetable entry's live train by train number
//! - **Status**: derives bot / user / remote control for every station
//! - **Filter**: narrows the result to a layout's stations
//! - **Presentation**: renders the `{error, data: {t, s}}` wire response
//!
//! ## Architecture
//!
//! ```text
//! SnapshotFetcher ──► timetable, stations, trains
//!                              │
//!                  ┌───────────▼────────────┐
//!                  │      JoinEngine        │◄── LineTopology
//!                  │  - train by number     │
//!                  │  - station status      │
//!                  └───────────┬────────────┘
//!                              │ Snapshot (Ready | Unavailable)
//!                  ┌───────────▼────────────┐
//!                  │      filter()          │◄── included station ids
//!                  └───────────┬────────────┘
//!                              │ Snapshot
//!                  ┌───────────▼────────────┐
//!                  │   SnapshotResponse     │──► JSON
//!                  └────────────────────────┘
//! ```
//!
//! `LayoutPipeline` wires the three stages to a `TopologyStore`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use railside_aggregator::{JoinEngine, LayoutPipeline};
//!
//! let pipeline = LayoutPipeline::new(topology, JoinEngine::new(fetcher));
//!
//! let response = pipeline.response("en1", "1")?;
//! println!("{}", serde_json::to_string(&response)?);
//! ```

pub mod error;
pub mod filter;
pub mod join;
pub mod pipeline;
pub mod presentation;
pub mod status;

// Re-export main types
pub use error::{AggregatorError, Result};
pub use filter::{SERVER_UNAVAILABLE, filter};
pub use join::{JoinEngine, JoinStats, join_documents};
pub use pipeline::LayoutPipeline;
pub use presentation::{ResponseData, SnapshotResponse, StationRecord, TrainRecord};
pub use status::{DispatchIndex, derive_status};
