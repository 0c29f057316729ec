#[cfg(test)]
pub mod fixtures {
    use crate::aggregator::SummaryBuilder;
    use crate::engine::ScanOutcome;
    use crate::types::{Keyword, Match, ScanResult};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Build a match whose context window is centred on `line`.
    pub fn create_match(path: &str, line: usize, keyword: &str, context: &[&str]) -> Match {
        Match {
            path: path.to_string(),
            line,
            context_start: line.saturating_sub(context.len() / 2).max(1),
            context: context.iter().map(|s| s.to_string()).collect(),
            keyword: keyword.to_string(),
        }
    }

    pub fn keywords(words: &[&str]) -> Vec<Keyword> {
        words.iter().map(|w| Keyword::new(*w).unwrap()).collect()
    }

    /// Wrap already-ordered matches in a scan outcome with a matching summary.
    pub fn create_outcome(matches: Vec<Match>, keywords: &[Keyword]) -> ScanOutcome {
        let result = ScanResult::from_ordered(matches);
        let summary = SummaryBuilder::new()
            .with_files_scanned(result.files_with_matches())
            .with_tasks(result.files_with_matches() * keywords.len())
            .build(&result, keywords);
        ScanOutcome {
            result,
            diagnostics: Vec::new(),
            summary,
        }
    }

    /// Write `files` (relative path, content) under a fresh temporary directory.
    pub fn create_tree(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (rel, content) in files {
            write_file(dir.path(), rel, content);
        }
        dir
    }

    pub fn write_file(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}
