use crate::aggregator::ScanSummary;
use crate::engine::ScanDiagnostic;
use crate::reporter::{ReportInput, Reporter};
use crate::types::{Keyword, Match};
use serde::Serialize;

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    version: &'static str,
    generated_at: String,
    keywords: &'a [Keyword],
    summary: &'a ScanSummary,
    diagnostics: &'a [ScanDiagnostic],
    matches: &'a [Match],
}

impl Reporter for JsonReporter {
    fn report(&self, input: &ReportInput<'_>) -> String {
        let report = JsonReport {
            title: input.title,
            version: env!("CARGO_PKG_VERSION"),
            generated_at: input.generated_at.to_rfc3339(),
            keywords: input.keywords,
            summary: &input.outcome.summary,
            diagnostics: &input.outcome.diagnostics,
            matches: input.outcome.result.matches(),
        };
        serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize result: {}"}}"#, e))
    }
}
