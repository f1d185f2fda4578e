//! Wiring of stores, fetcher and pipeline

use std::sync::Arc;

use log::{info, warn};
use railside_aggregator::{JoinEngine, LayoutPipeline, SnapshotResponse};
use railside_core::{Layout, ServerCode, ServerInfo};
use railside_fetcher::{FileServerDirectory, FileSnapshotStore};
use railside_ports::{ServerDirectory, SnapshotFetcher, TopologyStore};
use railside_topology::JsonTopologyStore;
use serde::Serialize;

use crate::config::RunnerConfig;
use crate::error::{Result, RunnerError};

/// Rendered response of one server
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerResponse {
    pub server: ServerCode,
    #[serde(flatten)]
    pub response: SnapshotResponse,
}

pub struct Railside {
    pipeline: Arc<LayoutPipeline>,
    directory: Arc<dyn ServerDirectory>,
    active_only: bool,
    default_server: Option<String>,
}

impl Railside {
    /// Load the topology and point the fetcher at the configured data dir
    pub fn from_config(config: &RunnerConfig) -> Result<Self> {
        info!(
            "Loading topology from {} and {}",
            config.layouts_path.display(),
            config.lines_path.display()
        );
        let topology = JsonTopologyStore::from_files(&config.layouts_path, &config.lines_path)?;

        info!("Reading server documents from {}", config.data_dir.display());
        let fetcher = FileSnapshotStore::new(&config.data_dir);
        let directory =
            FileServerDirectory::new(&config.data_dir, config.excluded_servers.iter().cloned());

        Ok(Self::from_parts(
            Arc::new(topology),
            Arc::new(fetcher),
            Arc::new(directory),
            config,
        ))
    }

    pub fn from_parts(
        topology: Arc<dyn TopologyStore>,
        fetcher: Arc<dyn SnapshotFetcher>,
        directory: Arc<dyn ServerDirectory>,
        config: &RunnerConfig,
    ) -> Self {
        Self {
            pipeline: Arc::new(LayoutPipeline::new(topology, JoinEngine::new(fetcher))),
            directory,
            active_only: config.active_only,
            default_server: config.default_server.clone(),
        }
    }

    /// `server`, or the configured default
    pub fn resolve_server(&self, server: Option<&str>) -> Result<String> {
        server
            .or(self.default_server.as_deref())
            .map(str::to_string)
            .ok_or(RunnerError::NoServer)
    }

    /// Response for one server and layout
    pub fn render(&self, server: &str, layout: &str) -> Result<SnapshotResponse> {
        Ok(self.pipeline.response(server, layout)?)
    }

    pub fn layout_info(&self, number: &str) -> Result<Layout> {
        Ok(self.pipeline.layout(number)?.clone())
    }

    pub fn list_servers(&self) -> Result<Vec<ServerInfo>> {
        Ok(self.directory.servers(self.active_only)?)
    }

    /// Render `layout` for every listed server, in directory order
    ///
    /// Each server is rendered on the blocking pool; an unknown layout fails
    /// before any server is read.
    pub async fn render_all(&self, layout: &str) -> Result<Vec<ServerResponse>> {
        self.pipeline.layout(layout)?;
        let servers = self.directory.server_codes(self.active_only)?;
        info!("Rendering layout {} for {} servers", layout, servers.len());

        let handles: Vec<_> = servers
            .into_iter()
            .map(|server| {
                let pipeline = Arc::clone(&self.pipeline);
                let layout = layout.to_string();
                tokio::task::spawn_blocking(move || {
                    let response = pipeline.response(&server, &layout);
                    (server, response)
                })
            })
            .collect();

        let mut responses = Vec::with_capacity(handles.len());
        for handle in handles {
            let (server, response) = handle.await?;
            let response = response?;
            if let Some(error) = &response.error {
                warn!("{}: {}", server, error);
            }
            responses.push(ServerResponse { server, response });
        }

        Ok(responses)
    }
}
