use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures of a collection store.
///
/// `Io` and `Decode` carry the file path for the logs. The HTTP layer never echoes
/// these messages to clients.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error at path '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed collection data in '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode collection: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StoreError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn decode(path: &Path, source: serde_json::Error) -> Self {
        StoreError::Decode {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
