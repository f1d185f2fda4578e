//! Runner configuration
//!
//! Loaded from a JSON file; every field is optional:
//!
//! ```json
//! {
//!   "data_dir": "../files",
//!   "layouts_path": "../layouts/layouts.json",
//!   "lines_path": "../lines.json",
//!   "excluded_servers": ["cz1", "de3"],
//!   "active_only": true,
//!   "default_server": "en1"
//! }
//! ```
//!
//! `RAILSIDE_DATA_DIR`, `RAILSIDE_LAYOUTS` and `RAILSIDE_LINES` override the
//! paths after loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_DATA_DIR: &str = "RAILSIDE_DATA_DIR";
pub const ENV_LAYOUTS: &str = "RAILSIDE_LAYOUTS";
pub const ENV_LINES: &str = "RAILSIDE_LINES";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Directory the upstream poller writes its documents to
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_layouts_path")]
    pub layouts_path: PathBuf,

    #[serde(default = "default_lines_path")]
    pub lines_path: PathBuf,

    /// Servers never listed or rendered
    #[serde(default = "default_excluded_servers")]
    pub excluded_servers: Vec<String>,

    /// Skip servers the directory reports as inactive
    #[serde(default = "default_active_only")]
    pub active_only: bool,

    /// Server rendered when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_server: Option<String>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("../files")
}

fn default_layouts_path() -> PathBuf {
    PathBuf::from("../layouts/layouts.json")
}

fn default_lines_path() -> PathBuf {
    PathBuf::from("../lines.json")
}

fn default_excluded_servers() -> Vec<String> {
    ["cz1", "de3", "int3", "int4", "int5", "int6", "pl2", "pl3", "pl4"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_active_only() -> bool {
    true
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            layouts_path: default_layouts_path(),
            lines_path: default_lines_path(),
            excluded_servers: default_excluded_servers(),
            active_only: default_active_only(),
            default_server: None,
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply overrides from the process environment
    pub fn apply_env(self) -> Self {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; empty values are ignored
    pub fn apply_env_with(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        if let Some(dir) = value(ENV_DATA_DIR) {
            self.data_dir = dir;
        }
        if let Some(path) = value(ENV_LAYOUTS) {
            self.layouts_path = path;
        }
        if let Some(path) = value(ENV_LINES) {
            self.lines_path = path;
        }
        self
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
