use thiserror::Error;

/// Errors surfaced by the fetch collaborators (store and snapshot).
///
/// The simulator itself is a total function and has no error path of its
/// own; any failure here aborts the run before `simulate` is invoked.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cannot read snapshot {path}: {source}")]
    SnapshotRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Cannot write snapshot {path}: {source}")]
    SnapshotWrite {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
