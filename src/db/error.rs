use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by a query executor.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open database at {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to create directory {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("query returned no result")]
    NoResult,

    #[error("failed to close database connection: {0}")]
    Close(#[source] rusqlite::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
