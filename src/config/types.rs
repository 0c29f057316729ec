//! Configuration type definitions.

use crate::engine::{DEFAULT_CONTEXT_AFTER, DEFAULT_CONTEXT_BEFORE, DEFAULT_SCAN_WORKERS};
use crate::remote::DEFAULT_CLONE_WORKERS;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default report title.
pub const DEFAULT_REPORT_TITLE: &str = "Search Results";

/// Main configuration structure for git-scraper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scan engine configuration.
    pub scan: ScanConfig,
    /// Repository cloning configuration.
    pub clone: CloneConfig,
    /// Report output configuration.
    pub report: ReportConfig,
}

/// Scan engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Size of the scan worker pool.
    pub workers: usize,
    /// Context lines kept before a match.
    pub context_before: usize,
    /// Context lines kept after a match.
    pub context_after: usize,
    /// Follow symbolic links while walking.
    pub follow_symlinks: bool,
    /// Directory names pruned from the walk.
    pub exclude_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_SCAN_WORKERS,
            context_before: DEFAULT_CONTEXT_BEFORE,
            context_after: DEFAULT_CONTEXT_AFTER,
            follow_symlinks: false,
            exclude_dirs: Vec::new(),
        }
    }
}

/// Repository cloning configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloneConfig {
    /// Number of concurrent clones.
    pub workers: usize,
    /// History depth; `None` clones the full history.
    pub depth: Option<u32>,
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_CLONE_WORKERS,
            depth: Some(1),
        }
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Json,
}

/// Report output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            title: DEFAULT_REPORT_TITLE.to_string(),
        }
    }
}
