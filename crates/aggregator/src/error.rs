//! Aggregator errors

use railside_ports::TopologyError;
use thiserror::Error;

/// Errors that escape the pipeline
///
/// Upstream document failures never show up here; they degrade the
/// snapshot instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregatorError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error("Cannot render response: {0}")]
    Render(String),
}

impl AggregatorError {
    /// Returns true for an unknown layout or line
    pub fn is_not_found(&self) -> bool {
        match self {
            AggregatorError::Topology(e) => e.is_not_found(),
            AggregatorError::Render(_) => false,
        }
    }
}

impl From<serde_json::Error> for AggregatorError {
    fn from(e: serde_json::Error) -> Self {
        AggregatorError::Render(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AggregatorError>;
