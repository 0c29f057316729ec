//! Per-file keyword scanning.

use super::context::{self, ContextRadius};
use super::error::ScanError;
use crate::types::{Keyword, Match};
use std::fs;
use std::path::Path;
use tracing::{trace, warn};

/// Source of file bytes for scan tasks.
///
/// Every call opens, reads, and closes its own handle; implementations must
/// not keep descriptors alive between calls.
pub trait FileReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<Vec<u8>, ScanError>;
}

/// Reads files straight from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read(&self, path: &Path) -> Result<Vec<u8>, ScanError> {
        let metadata = fs::metadata(path).map_err(|e| ScanError::read_error(path, e))?;
        if !metadata.is_file() {
            return Err(ScanError::NotAFile(path.to_path_buf()));
        }
        fs::read(path).map_err(|e| ScanError::read_error(path, e))
    }
}

/// Finds every line of one file containing one keyword.
#[derive(Debug, Clone)]
pub struct FileScanner<R = FsReader> {
    radius: ContextRadius,
    reader: R,
}

impl FileScanner<FsReader> {
    pub fn new(radius: ContextRadius) -> Self {
        Self::with_reader(radius, FsReader)
    }
}

impl Default for FileScanner<FsReader> {
    fn default() -> Self {
        Self::new(ContextRadius::default())
    }
}

impl<R: FileReader> FileScanner<R> {
    pub fn with_reader(radius: ContextRadius, reader: R) -> Self {
        Self { radius, reader }
    }

    pub fn radius(&self) -> ContextRadius {
        self.radius
    }

    /// Scan `path` for `keyword`, degrading any read failure to no matches.
    pub fn scan(&self, path: &Path, keyword: &Keyword) -> Vec<Match> {
        self.try_scan(path, keyword).unwrap_or_else(|e| {
            warn!(path = %path.display(), keyword = %keyword, error = %e, "Failed to scan file");
            Vec::new()
        })
    }

    /// Scan `path` for `keyword`, surfacing read failures to the caller.
    ///
    /// Undecodable bytes are replaced rather than rejected, so a binary file
    /// yields zero or partial matches instead of an error.
    pub fn try_scan(&self, path: &Path, keyword: &Keyword) -> Result<Vec<Match>, ScanError> {
        trace!(path = %path.display(), keyword = %keyword, "Scanning file");
        let bytes = self.reader.read(path)?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(self.scan_text(&path.display().to_string(), &text, keyword))
    }

    /// Scan already-decoded text, labelling matches with `path`.
    pub fn scan_text(&self, path: &str, text: &str, keyword: &Keyword) -> Vec<Match> {
        let lines = split_lines(text);

        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| keyword.is_found_in(line))
            .map(|(index, _)| {
                let line = index + 1;
                let (context_start, _) = context::window_bounds(lines.len(), line, self.radius);
                Match {
                    path: path.to_string(),
                    line,
                    context_start,
                    context: context::extract(&lines, line, self.radius),
                    keyword: keyword.as_str().to_string(),
                }
            })
            .collect()
    }
}

/// Split `text` on `\n`, `\r\n` or a lone `\r`.
///
/// A trailing terminator does not start an extra empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
