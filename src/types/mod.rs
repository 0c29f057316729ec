//! Core value types shared by the scanning engine and the reporters.
//!
//! This module provides NewType wrappers for keywords and credentials,
//! plus the `Match` / `ScanResult` data model handed to reporting.

mod newtypes;
mod results;

pub use newtypes::{AuthToken, Keyword};
pub use results::{Match, ScanResult};
