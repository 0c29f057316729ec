//! CLI command handlers.
//!
//! This module contains the handler functions for CLI commands,
//! separated from main.rs to enable unit testing.

mod run;

pub use run::{RunReport, execute, format_summary, run_normal_mode};
