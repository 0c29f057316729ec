//! Configuration layer for git-scraper.
//!
//! ## Layers
//! - `types`: Configuration type definitions
//! - `loading`: File loading logic
//! - `settings`: CLI + config merging

mod error;
mod loading;
mod settings;
mod types;

pub use error::ConfigError;
pub use settings::Settings;
pub use types::{
    CloneConfig, Config, DEFAULT_REPORT_TITLE, ReportConfig, ReportFormat, ScanConfig,
};
