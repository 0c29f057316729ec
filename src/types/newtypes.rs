//! NewType wrappers for primitive types.

use regex::{Regex, RegexBuilder};
use serde::{Serialize, Serializer};
use std::fmt;

/// A case-insensitive literal search term.
///
/// The keyword text is escaped before compilation, so characters such as
/// `.` or `*` match themselves and never act as pattern syntax.
#[derive(Clone)]
pub struct Keyword {
    text: String,
    matcher: Regex,
}

impl Keyword {
    /// Compile a keyword from its literal text.
    pub fn new(text: impl Into<String>) -> Result<Self, regex::Error> {
        let text = text.into();
        let matcher = RegexBuilder::new(&regex::escape(&text))
            .case_insensitive(true)
            .build()?;
        Ok(Self { text, matcher })
    }

    /// The keyword as it was written in the keyword list.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the keyword occurs anywhere in `line`, ignoring case.
    pub fn is_found_in(&self, line: &str) -> bool {
        self.matcher.is_match(line)
    }

    /// Byte ranges of every occurrence of the keyword in `line`.
    pub fn occurrences<'a>(&'a self, line: &'a str) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.matcher.find_iter(line).map(|m| (m.start(), m.end()))
    }

    /// Case-insensitive identity used for de-duplicating keyword lists.
    pub fn fold_key(&self) -> String {
        self.text.to_lowercase()
    }
}

impl PartialEq for Keyword {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Keyword {}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Keyword").field(&self.text).finish()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Serialize for Keyword {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Git hosting authentication token.
///
/// Implements a secure Debug that doesn't leak the token value.
#[derive(Clone)]
pub struct AuthToken(String);

impl AuthToken {
    /// Create a new AuthToken from any string-like type.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the underlying token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "AuthToken(empty)")
        } else {
            write!(f, "AuthToken(***)")
        }
    }
}

impl From<&str> for AuthToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AuthToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}
