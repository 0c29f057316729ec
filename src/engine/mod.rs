//! Keyword scanning engine.
//!
//! Leaf-first:
//! - `context`: bounded context windows around a matching line
//! - `file_scanner`: all matches of one keyword in one file
//! - `coordinator`: fans (file, keyword) tasks out over a bounded worker pool
//!
//! The engine produces an ordered `ScanResult` for the reporters.

pub mod context;
pub mod coordinator;
pub mod error;
pub mod file_scanner;

pub use context::{ContextRadius, DEFAULT_CONTEXT_AFTER, DEFAULT_CONTEXT_BEFORE};
pub use coordinator::{
    CoordinatorConfig, DEFAULT_SCAN_WORKERS, ScanCoordinator, ScanDiagnostic, ScanOutcome,
};
pub use error::ScanError;
pub use file_scanner::{FileReader, FileScanner, FsReader};
