//! Output formatter for scan outcomes.

use crate::config::ReportFormat;
use crate::reporter::{HtmlReporter, JsonReporter, ReportInput, Reporter};

/// Unified output formatter that selects the appropriate reporter.
pub struct OutputFormatter {
    format: ReportFormat,
}

impl OutputFormatter {
    /// Create a new output formatter.
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn format_kind(&self) -> ReportFormat {
        self.format
    }

    /// Format the report input to a string.
    pub fn format(&self, input: &ReportInput<'_>) -> String {
        match self.format {
            ReportFormat::Html => HtmlReporter::new().report(input),
            ReportFormat::Json => JsonReporter::new().report(input),
        }
    }
}
