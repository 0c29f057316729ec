pub mod aggregator;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod input;
pub mod output;
pub mod remote;
pub mod reporter;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use aggregator::{ResultAggregator, ScanSummary, TaskResult, aggregate};
pub use cli::Cli;
pub use config::{Config, ReportFormat, Settings};
pub use discovery::{DirectoryWalker, WalkConfig};
pub use engine::{
    ContextRadius, CoordinatorConfig, FileScanner, ScanCoordinator, ScanDiagnostic, ScanError,
    ScanOutcome,
};
pub use error::{Result, ScrapeError};
pub use remote::{CloneBatch, CloneReport, CloneWorkspace, GitCloner, RemoteError};
pub use reporter::{HtmlReporter, JsonReporter, ReportInput, Reporter};
pub use types::{Keyword, Match, ScanResult};
