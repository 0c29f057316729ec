//! Input layer: where the run's paths come from and how list files are read.

pub mod error;
pub mod lists;
pub mod source;

pub use error::InputError;
pub use lists::{parse_keywords, parse_repos, read_keyword_list, read_repo_list};
pub use source::{InputSource, Prompter, ResolvedInput, SourceResolver, TerminalPrompter};
