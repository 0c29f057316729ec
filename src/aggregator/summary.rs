//! Summary of a scan pass.

use crate::types::{Keyword, ScanResult};
use serde::Serialize;

/// Number of matches reported for one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub matches: usize,
}

/// Counters describing one scan pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub tasks: usize,
    pub failed_tasks: usize,
    pub total_matches: usize,
    pub files_with_matches: usize,
    /// Per-keyword match counts in keyword list order.
    pub keywords: Vec<KeywordCount>,
}

/// Builder for creating scan summaries.
#[derive(Debug, Default)]
pub struct SummaryBuilder {
    files_scanned: usize,
    tasks: usize,
    failed_tasks: usize,
}

impl SummaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of files scanned.
    pub fn with_files_scanned(mut self, count: usize) -> Self {
        self.files_scanned = count;
        self
    }

    /// Set the number of scan tasks run.
    pub fn with_tasks(mut self, count: usize) -> Self {
        self.tasks = count;
        self
    }

    /// Set the number of tasks that could not read their file.
    pub fn with_failed_tasks(mut self, count: usize) -> Self {
        self.failed_tasks = count;
        self
    }

    /// Build the summary.
    pub fn build(self, result: &ScanResult, keywords: &[Keyword]) -> ScanSummary {
        let keywords = keywords
            .iter()
            .map(|keyword| KeywordCount {
                keyword: keyword.as_str().to_string(),
                matches: result.for_keyword(keyword.as_str()).count(),
            })
            .collect();

        ScanSummary {
            files_scanned: self.files_scanned,
            tasks: self.tasks,
            failed_tasks: self.failed_tasks,
            total_matches: result.len(),
            files_with_matches: result.files_with_matches(),
            keywords,
        }
    }
}
