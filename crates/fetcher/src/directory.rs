use std::collections::HashSet;
use std::path::PathBuf;

use log::debug;
use railside_core::{DataEnvelope, ServerInfo};
use railside_ports::{DocumentKind, FetchResult, ServerDirectory};

use crate::document::read_document;

/// Server list read from `{dir}/.servers.json`
#[derive(Debug, Clone)]
pub struct FileServerDirectory {
    path: PathBuf,
    excluded: HashSet<String>,
}

impl FileServerDirectory {
    pub fn new<I, S>(dir: impl Into<PathBuf>, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: dir.into().join(".servers.json"),
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_excluded(&self, code: &str) -> bool {
        self.excluded.contains(code)
    }
}

impl ServerDirectory for FileServerDirectory {
    fn servers(&self, active_only: bool) -> FetchResult<Vec<ServerInfo>> {
        let all = read_document::<DataEnvelope<ServerInfo>>(&self.path, DocumentKind::Servers, "*")?
            .into_inner();
        let total = all.len();

        let servers: Vec<ServerInfo> = all
            .into_iter()
            .filter(|server| !self.is_excluded(&server.code))
            .filter(|server| !active_only || server.is_active)
            .collect();

        debug!(
            "Server directory: {} of {} servers listed (active_only={})",
            servers.len(),
            total,
            active_only
        );

        Ok(servers)
    }
}
