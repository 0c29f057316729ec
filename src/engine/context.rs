//! Context window extraction around a matching line.

use serde::{Deserialize, Serialize};

/// Default number of lines kept before a match.
pub const DEFAULT_CONTEXT_BEFORE: usize = 5;

/// Default number of lines kept after a match.
pub const DEFAULT_CONTEXT_AFTER: usize = 6;

/// How many lines to keep on each side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextRadius {
    pub before: usize,
    pub after: usize,
}

impl ContextRadius {
    pub fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// Largest possible window length for this radius.
    pub fn max_window(&self) -> usize {
        self.before + self.after + 1
    }
}

impl Default for ContextRadius {
    fn default() -> Self {
        Self {
            before: DEFAULT_CONTEXT_BEFORE,
            after: DEFAULT_CONTEXT_AFTER,
        }
    }
}

/// Inclusive, 1-based `(start, end)` of the window around `match_line`,
/// clamped to the file's extremities.
///
/// # Panics
///
/// Panics if `match_line` is not within `1..=line_count`.
pub fn window_bounds(line_count: usize, match_line: usize, radius: ContextRadius) -> (usize, usize) {
    assert!(
        (1..=line_count).contains(&match_line),
        "match line {match_line} outside 1..={line_count}"
    );
    let start = match_line.saturating_sub(radius.before).max(1);
    let end = match_line.saturating_add(radius.after).min(line_count);
    (start, end)
}

/// Extract the trimmed lines surrounding `match_line`.
///
/// # Panics
///
/// Panics if `match_line` is not within `1..=lines.len()`.
pub fn extract<S: AsRef<str>>(lines: &[S], match_line: usize, radius: ContextRadius) -> Vec<String> {
    let (start, end) = window_bounds(lines.len(), match_line, radius);
    lines[start - 1..end]
        .iter()
        .map(|line| line.as_ref().trim().to_string())
        .collect()
}
