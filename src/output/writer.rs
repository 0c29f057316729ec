//! Report file writing.

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Output directory does not exist: {0}")]
    MissingDirectory(PathBuf),

    #[error("Output path is a directory: {0}")]
    IsDirectory(PathBuf),

    #[error("Output location is not writable: {path}")]
    NotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Check that a report could be written to `path` before any work starts.
///
/// Probes the parent directory with a temporary file, which is removed again.
pub fn check_writable(path: &Path) -> Result<(), OutputError> {
    if path.is_dir() {
        return Err(OutputError::IsDirectory(path.to_path_buf()));
    }

    let dir = parent_dir(path);
    if !dir.is_dir() {
        return Err(OutputError::MissingDirectory(dir.to_path_buf()));
    }

    NamedTempFile::new_in(dir).map_err(|source| OutputError::NotWritable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Write `content` to `path` through a temporary file in the same directory.
///
/// The destination either keeps its previous content or receives the full
/// new content; a failed write leaves nothing behind.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), OutputError> {
    let to_err = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(parent_dir(path)).map_err(to_err)?;
    file.write_all(content.as_bytes()).map_err(to_err)?;
    file.as_file().sync_all().map_err(to_err)?;
    file.persist(path).map_err(|e| to_err(e.error))?;

    debug!(path = %path.display(), bytes = content.len(), "Report written");
    Ok(())
}
