//! Parallel cloning of a repository list.

use super::clone::{ClonedRepo, GitCloner, repo_dir_name};
use super::error::RemoteError;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default maximum parallel clones
pub const DEFAULT_CLONE_WORKERS: usize = 5;

/// A repository that could not be cloned.
#[derive(Debug)]
pub struct CloneFailure {
    pub url: String,
    pub error: RemoteError,
}

/// Outcome of cloning a list of repositories, in input order.
#[derive(Debug, Default)]
pub struct CloneReport {
    pub cloned: Vec<ClonedRepo>,
    pub failed: Vec<CloneFailure>,
}

impl CloneReport {
    pub fn total(&self) -> usize {
        self.cloned.len() + self.failed.len()
    }

    pub fn all_failed(&self) -> bool {
        self.cloned.is_empty() && !self.failed.is_empty()
    }
}

/// Clones many repositories into one destination on a bounded pool.
#[derive(Debug, Clone)]
pub struct CloneBatch {
    cloner: GitCloner,
    workers: usize,
}

impl CloneBatch {
    pub fn new(cloner: GitCloner) -> Self {
        Self {
            cloner,
            workers: DEFAULT_CLONE_WORKERS,
        }
    }

    /// Set the number of concurrent clones (at least one).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Clone every URL into `<dest>/<name>`.
    ///
    /// A failing repository is recorded in the report and does not stop the
    /// others. Only a pool start-up failure aborts the batch.
    pub fn clone_all(&self, urls: &[String], dest: &Path) -> Result<CloneReport, RemoteError> {
        let plan = plan_destinations(urls, dest);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("clone-worker-{}", i))
            .build()?;

        info!(repos = urls.len(), workers = self.workers, "Cloning repositories");

        let outcomes: Vec<(String, Result<ClonedRepo, RemoteError>)> = pool.install(|| {
            plan.into_par_iter()
                .map(|(url, target)| {
                    let result = match target {
                        Some(path) => self.cloner.clone_into(&url, &path),
                        None => Err(RemoteError::InvalidUrl(format!(
                            "URL has no repository name: {}",
                            url
                        ))),
                    };
                    (url, result)
                })
                .collect()
        });

        let mut report = CloneReport::default();
        for (url, result) in outcomes {
            match result {
                Ok(repo) => report.cloned.push(repo),
                Err(error) => {
                    warn!(url = %url, error = %error, "Clone failed");
                    report.failed.push(CloneFailure { url, error });
                }
            }
        }

        info!(
            cloned = report.cloned.len(),
            failed = report.failed.len(),
            "Cloning finished"
        );
        Ok(report)
    }
}

/// Assign each URL a unique directory under `dest`, in input order.
fn plan_destinations(urls: &[String], dest: &Path) -> Vec<(String, Option<PathBuf>)> {
    let mut taken = HashSet::new();

    urls.iter()
        .map(|url| {
            let target = repo_dir_name(url).map(|base| {
                let mut name = base.clone();
                let mut suffix = 2;
                while !taken.insert(name.to_lowercase()) {
                    name = format!("{}-{}", base, suffix);
                    suffix += 1;
                }
                dest.join(name)
            });
            (url.clone(), target)
        })
        .collect()
}
