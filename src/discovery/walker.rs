//! Directory walking for scan-target enumeration.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};
use walkdir::{DirEntry, WalkDir};

/// Configuration for directory walking.
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// Directory names to prune wherever they appear (e.g., [".git"]).
    pub exclude_dirs: Vec<String>,
    /// Maximum depth to traverse. None means unlimited.
    pub max_depth: Option<usize>,
    /// Whether to follow symbolic links.
    pub follow_symlinks: bool,
}

impl WalkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set directory names to skip.
    pub fn with_exclude_dirs(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exclude_dirs = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set maximum depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set whether to follow symlinks.
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

/// Enumerates regular files under a root in a stable order.
///
/// Entries are visited depth-first with siblings sorted by file name, so two
/// walks over an unchanged tree yield the same sequence. When symlinks are
/// followed, each directory is entered at most once (keyed by its canonical
/// path), which also breaks symlink cycles.
pub struct DirectoryWalker {
    config: WalkConfig,
}

impl DirectoryWalker {
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.config.exclude_dirs.iter().any(|ex| ex == name))
    }

    /// Walk `root` and yield the path of every regular file.
    pub fn walk<'a>(&'a self, root: &Path) -> impl Iterator<Item = PathBuf> + use<'a> {
        let mut walker = WalkDir::new(root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name();

        if let Some(depth) = self.config.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut visited: HashSet<PathBuf> = HashSet::new();
        let track_visits = self.config.follow_symlinks;

        walker
            .into_iter()
            .filter_entry(move |entry| {
                if self.is_excluded(entry) {
                    trace!(path = %entry.path().display(), "Skipping excluded directory");
                    return false;
                }
                if track_visits && entry.file_type().is_dir() {
                    let identity = fs::canonicalize(entry.path())
                        .unwrap_or_else(|_| entry.path().to_path_buf());
                    if !visited.insert(identity) {
                        trace!(path = %entry.path().display(), "Skipping already visited directory");
                        return false;
                    }
                }
                true
            })
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "Failed to walk directory entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(DirEntry::into_path)
    }
}
