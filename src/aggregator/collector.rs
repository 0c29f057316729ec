//! Result aggregator for merging concurrent scan task output.

use crate::types::{Match, ScanResult};

/// Output of one (file, keyword) scan task, tagged with its ordering key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskResult {
    /// Position of the file in walk order.
    pub file_index: usize,
    /// Position of the keyword in the keyword list.
    pub keyword_index: usize,
    /// Matches in line order.
    pub matches: Vec<Match>,
}

impl TaskResult {
    pub fn new(file_index: usize, keyword_index: usize, matches: Vec<Match>) -> Self {
        Self {
            file_index,
            keyword_index,
            matches,
        }
    }

    fn key(&self) -> (usize, usize) {
        (self.file_index, self.keyword_index)
    }
}

/// Collects task results in completion order and merges them into a
/// `ScanResult` ordered by (file index, keyword index).
#[derive(Debug, Default)]
pub struct ResultAggregator {
    partials: Vec<TaskResult>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one completed task.
    pub fn push(&mut self, partial: TaskResult) {
        self.partials.push(partial);
    }

    /// Add several completed tasks.
    pub fn extend(&mut self, partials: impl IntoIterator<Item = TaskResult>) {
        self.partials.extend(partials);
    }

    /// Number of task results collected so far.
    pub fn len(&self) -> usize {
        self.partials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partials.is_empty()
    }

    /// Merge everything collected into the final ordered result.
    pub fn finish(mut self) -> ScanResult {
        self.partials.sort_by_key(TaskResult::key);
        let matches = self
            .partials
            .into_iter()
            .flat_map(|partial| partial.matches)
            .collect();
        ScanResult::from_ordered(matches)
    }
}

/// Merge task results, in any order, into a deterministic `ScanResult`.
pub fn aggregate(partials: impl IntoIterator<Item = TaskResult>) -> ScanResult {
    let mut aggregator = ResultAggregator::new();
    aggregator.extend(partials);
    aggregator.finish()
}
