//! Railside Runner
//!
//! Loads the configuration, wires the topology store, the file fetcher and
//! the server directory into a `LayoutPipeline`, and backs the `railside`
//! command line:
//!
//! ```text
//! RunnerConfig ──► JsonTopologyStore ─┐
//!              ──► FileSnapshotStore ─┼──► LayoutPipeline ──► SnapshotResponse
//!              ──► FileServerDirectory┘          ▲
//!                         │                      │ spawn_blocking per server
//!                         └──── server codes ────┘  (render_all)
//! ```

pub mod app;
pub mod config;
pub mod error;

// Re-export main types
pub use app::{Railside, ServerResponse};
pub use config::{ConfigError, RunnerConfig};
pub use error::{Result, RunnerError};
