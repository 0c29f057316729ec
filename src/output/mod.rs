//! Output layer.
//!
//! Renders a scan outcome with the reporter selected by [`ReportFormat`] and
//! writes it to disk without ever leaving a partial file behind.

pub mod formatter;
pub mod writer;

pub use formatter::OutputFormatter;
pub use writer::{OutputError, check_writable, write_atomic};

#[doc(no_inline)]
pub use crate::config::ReportFormat;
