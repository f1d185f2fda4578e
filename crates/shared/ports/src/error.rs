use std::fmt;

use thiserror::Error;

/// Upstream documents the fetcher serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Timetable,
    Trains,
    Stations,
    Servers,
    Timezone,
}

impl DocumentKind {
    /// File suffix of the cached document (`{server}.{suffix}.json`)
    pub fn file_suffix(&self) -> &'static str {
        match self {
            DocumentKind::Timetable => "timetable",
            DocumentKind::Trains => "trains",
            DocumentKind::Stations => "stations",
            DocumentKind::Servers => "servers",
            DocumentKind::Timezone => "timezones",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_suffix())
    }
}

/// Errors reading an upstream document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The document could not be read or is not JSON
    #[error("{document} document for server {server} is unavailable: {reason}")]
    Unavailable {
        document: DocumentKind,
        server: String,
        reason: String,
    },

    /// The document is JSON but does not have the expected shape
    #[error("{document} document for server {server} is malformed: {reason}")]
    Malformed {
        document: DocumentKind,
        server: String,
        reason: String,
    },
}

impl FetchError {
    pub fn unavailable(document: DocumentKind, server: &str, reason: impl Into<String>) -> Self {
        FetchError::Unavailable {
            document,
            server: server.to_string(),
            reason: reason.into(),
        }
    }

    pub fn malformed(document: DocumentKind, server: &str, reason: impl Into<String>) -> Self {
        FetchError::Malformed {
            document,
            server: server.to_string(),
            reason: reason.into(),
        }
    }

    pub fn document(&self) -> DocumentKind {
        match self {
            FetchError::Unavailable { document, .. } | FetchError::Malformed { document, .. } => {
                *document
            }
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, FetchError::Malformed { .. })
    }
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Errors looking up topology
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("Layout not found: {0}")]
    LayoutNotFound(String),

    #[error("No line document for layout {0}")]
    LineNotFound(String),

    #[error("Malformed topology document {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("Cannot read topology document {path}: {reason}")]
    Io { path: String, reason: String },
}

impl TopologyError {
    /// Lookup failures, as opposed to broken documents
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TopologyError::LayoutNotFound(_) | TopologyError::LineNotFound(_)
        )
    }
}

pub type TopologyResult<T> = std::result::Result<T, TopologyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_accessors() {
        let err = FetchError::malformed(DocumentKind::Trains, "en1", "missing field `tpl_next`");

        assert_eq!(err.document(), DocumentKind::Trains);
        assert!(err.is_malformed());
        assert_eq!(
            err.to_string(),
            "trains document for server en1 is malformed: missing field `tpl_next`"
        );
    }

    #[test]
    fn test_not_found_classification() {
        assert!(TopologyError::LayoutNotFound("9".to_string()).is_not_found());
        assert!(
            !TopologyError::Io {
                path: "lines.json".to_string(),
                reason: "denied".to_string()
            }
            .is_not_found()
        );
    }
}
