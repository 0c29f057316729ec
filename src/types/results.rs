//! Scan output data model.

use serde::Serialize;
use std::collections::BTreeSet;

/// One line of one file that contains a keyword, with its context window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Path of the file, as enumerated under the scan root.
    pub path: String,
    /// 1-based line number of the matching line.
    pub line: usize,
    /// 1-based line number of the first entry in `context`.
    pub context_start: usize,
    /// Whitespace-trimmed lines surrounding (and including) the match.
    pub context: Vec<String>,
    /// The keyword that produced this match, as written in the keyword list.
    pub keyword: String,
}

impl Match {
    /// Iterate context lines paired with their 1-based line numbers.
    pub fn numbered_context(&self) -> impl Iterator<Item = (usize, &str)> {
        self.context
            .iter()
            .enumerate()
            .map(move |(offset, line)| (self.context_start + offset, line.as_str()))
    }
}

/// Ordered, immutable sequence of matches produced by one scan pass.
///
/// Order is file enumeration order first, keyword list order second, and
/// line order within a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScanResult {
    matches: Vec<Match>,
}

impl ScanResult {
    pub(crate) fn from_ordered(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Matches whose grouping keyword is `keyword`, in result order.
    pub fn for_keyword<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = &'a Match> + 'a {
        self.matches.iter().filter(move |m| m.keyword == keyword)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of distinct files with at least one match.
    pub fn files_with_matches(&self) -> usize {
        self.matches
            .iter()
            .map(|m| m.path.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}
