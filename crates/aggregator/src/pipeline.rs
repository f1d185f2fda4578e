//! Layout Pipeline
//!
//! Resolves a layout against the topology, joins the server's documents on
//! the layout's line and filters the result to the layout's stations.

use std::sync::Arc;

use log::debug;
use railside_core::{Layout, Snapshot};
use railside_ports::TopologyStore;

use crate::error::Result;
use crate::filter::filter;
use crate::join::JoinEngine;
use crate::presentation::SnapshotResponse;

pub struct LayoutPipeline {
    topology: Arc<dyn TopologyStore>,
    engine: JoinEngine,
}

impl LayoutPipeline {
    pub fn new(topology: Arc<dyn TopologyStore>, engine: JoinEngine) -> Self {
        Self { topology, engine }
    }

    pub fn topology(&self) -> &Arc<dyn TopologyStore> {
        &self.topology
    }

    pub fn engine(&self) -> &JoinEngine {
        &self.engine
    }

    /// Layout document answering to `number`
    pub fn layout(&self, number: &str) -> Result<&Layout> {
        Ok(self.topology.layout(number)?)
    }

    /// Filtered snapshot of `server` for layout `number`
    ///
    /// Unknown layouts are errors. Missing upstream documents are not; they
    /// come back as an unavailable snapshot.
    pub fn snapshot(&self, server: &str, number: &str) -> Result<Snapshot> {
        let included = self.topology.included_station_ids(number)?;
        let line = self.topology.line_for_layout(number)?;
        let stations = self.topology.stations_for_line(line);

        debug!(
            "Rendering layout {} on {} ({} included of {} line stations, topology {})",
            number,
            server,
            included.len(),
            stations.len(),
            self.topology.name()
        );

        let joined = self.engine.join(server, &stations);
        Ok(filter(&joined, &included))
    }

    /// [`LayoutPipeline::snapshot`] rendered for the wire
    pub fn response(&self, server: &str, number: &str) -> Result<SnapshotResponse> {
        let snapshot = self.snapshot(server, number)?;
        Ok(SnapshotResponse::from(&snapshot))
    }
}
