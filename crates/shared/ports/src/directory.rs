use railside_core::{ServerCode, ServerInfo};

use crate::error::FetchResult;

/// Port for the list of game servers
pub trait ServerDirectory: Send + Sync {
    /// Known servers in document order, without excluded ones
    fn servers(&self, active_only: bool) -> FetchResult<Vec<ServerInfo>>;

    /// Codes of [`ServerDirectory::servers`]
    fn server_codes(&self, active_only: bool) -> FetchResult<Vec<ServerCode>> {
        Ok(self
            .servers(active_only)?
            .into_iter()
            .map(|server| server.code)
            .collect())
    }
}
