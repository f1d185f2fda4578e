//! Runner errors

use railside_aggregator::AggregatorError;
use railside_ports::{FetchError, TopologyError};
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Aggregator(#[from] AggregatorError),

    #[error("Cannot list servers: {0}")]
    Directory(#[from] FetchError),

    #[error("Render task failed: {0}")]
    Task(String),

    #[error("No server given and no default_server configured")]
    NoServer,
}

impl RunnerError {
    /// Returns true for an unknown layout
    pub fn is_not_found(&self) -> bool {
        match self {
            RunnerError::Topology(e) => e.is_not_found(),
            RunnerError::Aggregator(e) => e.is_not_found(),
            _ => false,
        }
    }
}

impl From<tokio::task::JoinError> for RunnerError {
    fn from(e: tokio::task::JoinError) -> Self {
        RunnerError::Task(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RunnerError>;
