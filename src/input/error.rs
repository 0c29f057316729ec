//! Input error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving and reading the run's input files.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read {kind} list {path}")]
    ReadList {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No entries found in {kind} list {path}")]
    EmptyList { kind: &'static str, path: PathBuf },

    #[error("Invalid keyword {keyword:?}")]
    InvalidKeyword {
        keyword: String,
        #[source]
        source: regex::Error,
    },

    #[error("Missing required input: {0} (pass it as a flag or run interactively)")]
    Missing(&'static str),

    #[error("Failed to read {0} from the terminal")]
    Prompt(&'static str, #[source] std::io::Error),
}
