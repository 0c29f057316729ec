pub mod highlight;
pub mod html;
pub mod json;
pub mod progress;

use crate::engine::ScanOutcome;
use crate::types::Keyword;
use chrono::{DateTime, Utc};

pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use progress::ScanProgress;

/// Everything a report is rendered from.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub title: &'a str,
    pub keywords: &'a [Keyword],
    pub outcome: &'a ScanOutcome,
    pub generated_at: DateTime<Utc>,
}

impl<'a> ReportInput<'a> {
    pub fn new(title: &'a str, keywords: &'a [Keyword], outcome: &'a ScanOutcome) -> Self {
        Self {
            title,
            keywords,
            outcome,
            generated_at: Utc::now(),
        }
    }

    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }
}

pub trait Reporter {
    fn report(&self, input: &ReportInput<'_>) -> String;
}
