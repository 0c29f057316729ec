//! Keyword and repository list files.
//!
//! Both formats are plain text with one entry per line. Lines are trimmed and
//! blank lines are dropped. Repository lists additionally treat lines that
//! start with `#` as comments.

use super::error::InputError;
use crate::types::Keyword;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and compile a keyword list.
///
/// Keywords are compared case-insensitively; later duplicates are dropped so
/// the first spelling is the one shown in the report.
pub fn read_keyword_list(path: &Path) -> Result<Vec<Keyword>, InputError> {
    let content = read_list(path, "keyword")?;
    let keywords = parse_keywords(&content)?;

    if keywords.is_empty() {
        return Err(InputError::EmptyList {
            kind: "keyword",
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), count = keywords.len(), "Loaded keyword list");
    Ok(keywords)
}

/// Read a repository URL list.
pub fn read_repo_list(path: &Path) -> Result<Vec<String>, InputError> {
    let content = read_list(path, "repository")?;
    let urls = parse_repos(&content);

    if urls.is_empty() {
        return Err(InputError::EmptyList {
            kind: "repository",
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), count = urls.len(), "Loaded repository list");
    Ok(urls)
}

/// Parse keyword list content.
pub fn parse_keywords(content: &str) -> Result<Vec<Keyword>, InputError> {
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for line in entries(content) {
        let keyword = Keyword::new(line).map_err(|source| InputError::InvalidKeyword {
            keyword: line.to_string(),
            source,
        })?;
        if seen.insert(keyword.fold_key()) {
            keywords.push(keyword);
        } else {
            debug!(keyword = line, "Skipping duplicate keyword");
        }
    }

    Ok(keywords)
}

/// Parse repository list content.
pub fn parse_repos(content: &str) -> Vec<String> {
    entries(content)
        .filter(|line| !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn entries(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

fn read_list(path: &Path, kind: &'static str) -> Result<String, InputError> {
    let bytes = fs::read(path).map_err(|source| InputError::ReadList {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
