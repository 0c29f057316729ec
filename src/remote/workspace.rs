//! Clone destination lifecycle.

use super::error::RemoteError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directory that receives the clones and is removed when dropped.
///
/// The destination must be absent or empty on creation so that removal
/// never touches files the tool did not write.
#[derive(Debug)]
pub struct CloneWorkspace {
    root: PathBuf,
    keep: bool,
}

impl CloneWorkspace {
    /// Prepare `root` for cloning, creating it if necessary.
    pub fn prepare(root: impl Into<PathBuf>) -> Result<Self, RemoteError> {
        let root = root.into();
        let to_err = |source| RemoteError::Destination {
            path: root.clone(),
            source,
        };

        if root.exists() {
            if !root.is_dir() {
                return Err(to_err(std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "path exists and is not a directory",
                )));
            }
            let mut entries = fs::read_dir(&root).map_err(to_err)?;
            if entries.next().is_some() {
                return Err(RemoteError::DestinationNotEmpty(root));
            }
        } else {
            fs::create_dir_all(&root).map_err(to_err)?;
        }

        debug!(path = %root.display(), "Clone workspace prepared");
        Ok(Self { root, keep: false })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Leave the directory on disk when the workspace is dropped.
    pub fn keep(mut self) -> PathBuf {
        self.keep = true;
        self.root.clone()
    }
}

impl Drop for CloneWorkspace {
    fn drop(&mut self) {
        if self.keep {
            return;
        }
        match fs::remove_dir_all(&self.root) {
            Ok(()) => debug!(path = %self.root.display(), "Clone workspace removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                path = %self.root.display(),
                error = %e,
                "Failed to remove clone workspace"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("nested").join("clones");

        let workspace = CloneWorkspace::prepare(&dest).unwrap();
        assert!(dest.is_dir());
        assert_eq!(workspace.path(), dest);
    }

    #[test]
    fn test_drop_removes_directory() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("clones");

        {
            let workspace = CloneWorkspace::prepare(&dest).unwrap();
            fs::write(workspace.path().join("file.txt"), "data").unwrap();
        }

        assert!(!dest.exists());
    }

    #[test]
    fn test_accepts_existing_empty_directory() {
        let dir = TempDir::new().unwrap();
        let workspace = CloneWorkspace::prepare(dir.path()).unwrap();
        assert_eq!(workspace.path(), dir.path());
    }

    #[test]
    fn test_rejects_non_empty_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("keep.txt"), "mine").unwrap();

        let result = CloneWorkspace::prepare(dir.path());
        assert!(matches!(result, Err(RemoteError::DestinationNotEmpty(_))));
        assert!(dir.path().join("keep.txt").exists());
    }

    #[test]
    fn test_rejects_file_destination() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, "x").unwrap();

        let result = CloneWorkspace::prepare(&file);
        assert!(matches!(result, Err(RemoteError::Destination { .. })));
        assert!(file.exists());
    }

    #[test]
    fn test_keep_leaves_directory() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("clones");

        let kept = CloneWorkspace::prepare(&dest).unwrap().keep();
        assert_eq!(kept, dest);
        assert!(dest.is_dir());
    }
}
