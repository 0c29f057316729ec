use crate::config::ConfigError;
use crate::engine::ScanError;
use crate::input::InputError;
use crate::output::OutputError;
use crate::remote::RemoteError;
use thiserror::Error;

/// Fatal errors that end a run before a report is produced.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl ScrapeError {
    /// Message with every underlying cause appended.
    pub fn chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        message
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_is_transparent() {
        let err = ScrapeError::from(InputError::Missing("keyword list file"));
        assert_eq!(
            err.to_string(),
            "Missing required input: keyword list file (pass it as a flag or run interactively)"
        );
    }

    #[test]
    fn test_chain_includes_io_cause() {
        let err = ScrapeError::from(InputError::ReadList {
            kind: "keyword",
            path: PathBuf::from("/missing/k.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        });
        assert_eq!(
            err.chain(),
            "Failed to read keyword list /missing/k.txt: No such file"
        );
    }

    #[test]
    fn test_chain_does_not_repeat_embedded_cause() {
        let err = ScrapeError::from(ConfigError::Read {
            path: PathBuf::from("c.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        assert_eq!(err.chain(), "Cannot read git-scraper config c.yaml: gone");
    }

    #[test]
    fn test_from_remote_error() {
        let err: ScrapeError = RemoteError::GitNotFound.into();
        assert!(matches!(err, ScrapeError::Remote(RemoteError::GitNotFound)));
    }
}
