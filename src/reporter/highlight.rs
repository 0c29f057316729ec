//! Keyword highlighting for HTML output.
//!
//! Lines are split on keyword occurrences before escaping, and every segment
//! is escaped exactly once. Markup inserted here therefore never ends up
//! inside an escaped entity, and text from the scanned file never becomes
//! markup.

use crate::types::Keyword;

/// Opening tag wrapped around each occurrence.
pub const MARK_OPEN: &str = "<mark class=\"highlight\">";
/// Closing tag wrapped around each occurrence.
pub const MARK_CLOSE: &str = "</mark>";

/// Escape `line` for HTML and wrap every case-insensitive occurrence of
/// `keyword` in a highlight mark. The original casing is kept.
pub fn highlight(line: &str, keyword: &Keyword) -> String {
    let mut out = String::with_capacity(line.len() + 32);
    let mut last = 0;

    for (start, end) in keyword.occurrences(line) {
        out.push_str(&html_escape(&line[last..start]));
        out.push_str(MARK_OPEN);
        out.push_str(&html_escape(&line[start..end]));
        out.push_str(MARK_CLOSE);
        last = end;
    }
    out.push_str(&html_escape(&line[last..]));
    out
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
