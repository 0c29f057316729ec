//! Aggregation layer.
//!
//! Scan tasks finish in whatever order the worker pool runs them. This module
//! merges their output into one `ScanResult` whose order depends only on the
//! walk order and the keyword list, and summarises the pass.

pub mod collector;
pub mod summary;

pub use collector::{ResultAggregator, TaskResult, aggregate};
pub use summary::{KeywordCount, ScanSummary, SummaryBuilder};
