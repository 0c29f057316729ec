use std::path::PathBuf;
use thiserror::Error;

/// Errors related to cloning remote repositories
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Git clone operation failed
    #[error("Git clone failed for {url}: {message}")]
    CloneFailed { url: String, message: String },

    /// Invalid repository URL format
    #[error("Invalid repository URL: {0}")]
    InvalidUrl(String),

    /// Repository not found (404)
    #[error("Repository not found: {0}")]
    NotFound(String),

    /// Authentication required for private repository
    #[error("Authentication required for private repository: {0}")]
    AuthRequired(String),

    /// Git command not found
    #[error("Git command not found. Please install git.")]
    GitNotFound,

    /// Clone destination already holds files
    #[error("Clone destination is not empty: {0}")]
    DestinationNotEmpty(PathBuf),

    /// Clone destination could not be prepared
    #[error("Failed to prepare clone destination {path}")]
    Destination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Clone worker pool could not be started
    #[error("Failed to start clone worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl RemoteError {
    /// Check if error is due to authentication issues
    pub fn is_auth_error(&self) -> bool {
        matches!(self, RemoteError::AuthRequired(_))
    }

    /// Check if the error concerns a single repository rather than the whole batch
    pub fn is_per_repository(&self) -> bool {
        matches!(
            self,
            RemoteError::CloneFailed { .. }
                | RemoteError::InvalidUrl(_)
                | RemoteError::NotFound(_)
                | RemoteError::AuthRequired(_)
        )
    }
}
