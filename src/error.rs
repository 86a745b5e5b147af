//! Error types for the query runner.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The store could not be opened, or the file is not a SQLite database.
    #[error("store unavailable at '{path}': {source}")]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement failed to prepare or execute.
    #[error("query '{label}' failed: {source}")]
    QueryError {
        label: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to load query set from '{path}': {message}")]
    QuerySetLoad { path: PathBuf, message: String },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Error::StoreUnavailable { .. })
    }

    pub fn is_query_error(&self) -> bool {
        matches!(self, Error::QueryError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::QueryError {
            label: "all cats".to_string(),
            source: rusqlite::Error::InvalidQuery,
        };
        assert!(err.to_string().starts_with("query 'all cats' failed"));
        assert!(err.is_query_error());
        assert!(!err.is_store_unavailable());
    }
}
