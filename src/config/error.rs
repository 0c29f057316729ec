//! Configuration error types.

use std::path::PathBuf;

/// A config file that could not be used, or a setting out of range.
///
/// Messages name the file but not the underlying cause; callers print the
/// source chain.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read git-scraper config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {format} in git-scraper config {}", path.display())]
    Parse {
        path: PathBuf,
        format: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(
        "git-scraper config {} has extension '{extension}' (expected yaml, yml, json or toml)",
        path.display()
    )]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Setting '{field}' {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn parse(
        path: &std::path::Path,
        format: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            format,
            source: Box::new(source),
        }
    }
}
