use std::fs;
use std::path::Path;

use railside_ports::{DocumentKind, FetchError, FetchResult};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

/// Read and parse one cached document
///
/// Unreadable files are `Unavailable`; anything that does not parse into `T`
/// is `Malformed`.
pub(crate) fn read_document<T: DeserializeOwned>(
    path: &Path,
    document: DocumentKind,
    server: &str,
) -> FetchResult<T> {
    let bytes = fs::read(path).map_err(|e| {
        FetchError::unavailable(document, server, format!("{}: {}", path.display(), e))
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        let reason = match e.classify() {
            Category::Data => e.to_string(),
            Category::Io | Category::Syntax | Category::Eof => format!("invalid JSON: {}", e),
        };
        FetchError::malformed(document, server, reason)
    })
}

/// Server codes end up in file names
pub(crate) fn validate_server_code(server: &str, document: DocumentKind) -> FetchResult<()> {
    let valid = !server.is_empty()
        && server
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(FetchError::unavailable(
            document,
            server,
            "invalid server code",
        ))
    }
}
