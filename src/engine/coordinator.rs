//! Scan coordination: one bounded worker pool per scan pass.
//!
//! The directory walk runs on the calling thread and feeds one task per
//! (file, keyword) pair into a fixed-size `rayon` pool. Workers send their
//! output over a channel tagged with the file's walk index and the keyword's
//! list index; the aggregator then restores that order, so the final
//! `ScanResult` does not depend on thread scheduling.

use super::context::ContextRadius;
use super::error::ScanError;
use super::file_scanner::{FileReader, FileScanner, FsReader};
use crate::aggregator::{ResultAggregator, ScanSummary, SummaryBuilder, TaskResult};
use crate::discovery::{DirectoryWalker, WalkConfig};
use crate::reporter::progress::ScanProgress;
use crate::types::{Keyword, Match, ScanResult};
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::Serialize;
use std::path::Path;
use std::sync::{Arc, mpsc};
use tracing::{debug, info, warn};

/// Default number of concurrent scan tasks.
pub const DEFAULT_SCAN_WORKERS: usize = 5;

/// Settings for one scan pass.
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    pub workers: usize,
    pub radius: ContextRadius,
    pub walk: WalkConfig,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_SCAN_WORKERS,
            radius: ContextRadius::default(),
            walk: WalkConfig::default(),
        }
    }
}

impl CoordinatorConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_radius(mut self, radius: ContextRadius) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_walk(mut self, walk: WalkConfig) -> Self {
        self.walk = walk;
        self
    }
}

/// A (file, keyword) task that could not read its file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanDiagnostic {
    pub path: String,
    pub keyword: String,
    pub message: String,
}

/// Everything one scan pass produced.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub result: ScanResult,
    /// Failed tasks, in the same (file, keyword) order as the result.
    pub diagnostics: Vec<ScanDiagnostic>,
    pub summary: ScanSummary,
}

struct TaskOutput {
    file_index: usize,
    keyword_index: usize,
    path: Arc<Path>,
    outcome: Result<Vec<Match>, ScanError>,
}

/// Fans (file, keyword) scan tasks out over a bounded worker pool.
pub struct ScanCoordinator<R = FsReader> {
    scanner: FileScanner<R>,
    walker: DirectoryWalker,
    pool: ThreadPool,
    workers: usize,
    progress: ScanProgress,
}

impl ScanCoordinator<FsReader> {
    pub fn new(config: CoordinatorConfig) -> Result<Self, ScanError> {
        Self::with_reader(config, FsReader)
    }
}

impl<R: FileReader> ScanCoordinator<R> {
    /// Build a coordinator that reads files through `reader`.
    pub fn with_reader(config: CoordinatorConfig, reader: R) -> Result<Self, ScanError> {
        let workers = config.workers.max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("scan-worker-{index}"))
            .build()?;

        Ok(Self {
            scanner: FileScanner::with_reader(config.radius, reader),
            walker: DirectoryWalker::new(config.walk),
            pool,
            workers,
            progress: ScanProgress::hidden(),
        })
    }

    /// Report task progress through `progress`.
    pub fn with_progress(mut self, progress: ScanProgress) -> Self {
        self.progress = progress;
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Scan every regular file under `root` for every keyword.
    ///
    /// Unreadable files become diagnostics and never stop the pass. Returns
    /// only after every scheduled task has finished.
    pub fn scan_all(&self, root: &Path, keywords: &[Keyword]) -> Result<ScanOutcome, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root.to_path_buf()));
        }

        info!(
            root = %root.display(),
            keywords = keywords.len(),
            workers = self.workers,
            "Starting scan"
        );

        let (tx, rx) = mpsc::channel::<TaskOutput>();
        let mut files_scanned = 0usize;

        self.pool.in_place_scope(|scope| {
            for (file_index, path) in self.walker.walk(root).enumerate() {
                files_scanned += 1;
                let path: Arc<Path> = Arc::from(path);
                self.progress.add_tasks(keywords.len());

                for (keyword_index, keyword) in keywords.iter().enumerate() {
                    let tx = tx.clone();
                    let path = Arc::clone(&path);
                    scope.spawn(move |_| {
                        let outcome = self.scanner.try_scan(&path, keyword);
                        self.progress.inc();
                        // The receiver outlives the scope, so this cannot fail.
                        let _ = tx.send(TaskOutput {
                            file_index,
                            keyword_index,
                            path,
                            outcome,
                        });
                    });
                }
            }
        });
        drop(tx);
        self.progress.finish();

        let mut aggregator = ResultAggregator::new();
        let mut failures = Vec::new();

        for output in rx {
            let matches = match output.outcome {
                Ok(matches) => matches,
                Err(e) => {
                    let keyword = &keywords[output.keyword_index];
                    warn!(
                        path = %output.path.display(),
                        keyword = %keyword,
                        error = %e,
                        "Failed to scan file"
                    );
                    failures.push((
                        (output.file_index, output.keyword_index),
                        ScanDiagnostic {
                            path: output.path.display().to_string(),
                            keyword: keyword.as_str().to_string(),
                            message: e.detail(),
                        },
                    ));
                    Vec::new()
                }
            };
            aggregator.push(TaskResult::new(
                output.file_index,
                output.keyword_index,
                matches,
            ));
        }

        let tasks = aggregator.len();
        failures.sort_by_key(|(key, _)| *key);
        let diagnostics: Vec<ScanDiagnostic> = failures.into_iter().map(|(_, d)| d).collect();

        let result = aggregator.finish();
        let summary = SummaryBuilder::new()
            .with_files_scanned(files_scanned)
            .with_tasks(tasks)
            .with_failed_tasks(diagnostics.len())
            .build(&result, keywords);

        debug!(
            files = files_scanned,
            tasks,
            failed = diagnostics.len(),
            "All scan tasks finished"
        );
        info!(matches = result.len(), "Scan completed");

        Ok(ScanOutcome {
            result,
            diagnostics,
            summary,
        })
    }
}
