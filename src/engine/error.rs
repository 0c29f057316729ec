//! Scan error types.

use std::path::PathBuf;
use thiserror::Error;

/// Why a scan task, or a whole scan pass, produced no matches.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Path is not a file: {0}")]
    NotAFile(PathBuf),

    #[error("Scan root is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to read file: {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start scan worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl ScanError {
    /// Create a ReadError from a path and IO error.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Human-readable cause, including the underlying IO error if any.
    pub fn detail(&self) -> String {
        match self {
            Self::ReadError { source, .. } => format!("{}: {}", self, source),
            other => other.to_string(),
        }
    }
}
