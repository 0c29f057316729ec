//! Progress bar for terminal output during scanning.
//!
//! Uses Braille pattern characters for a modern, high-density display.
//! The total grows while the directory walk discovers files, so the bar
//! starts empty and tasks are added as they are scheduled.

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str =
    "Scanning {bar:40} {pos:>6}/{len:6} tasks ({percent:>3}%) [{elapsed_precise}]";

/// Progress bar manager for scan operations. Cheap to clone and safe to
/// update from worker threads.
#[derive(Clone, Default)]
pub struct ScanProgress {
    bar: Option<ProgressBar>,
}

impl ScanProgress {
    /// Create a progress bar if conditions are met.
    ///
    /// Progress bar is only shown if:
    /// - Running in TTY (interactive terminal)
    /// - Not disabled by the user
    pub fn new(is_tty: bool, disabled: bool) -> Self {
        let bar = should_show_progress(is_tty, disabled).then(create_progress_bar);
        Self { bar }
    }

    /// A progress handle that never draws anything.
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Grow the total by `count` newly scheduled tasks.
    pub fn add_tasks(&self, count: usize) {
        if let Some(bar) = &self.bar {
            bar.inc_length(count as u64);
        }
    }

    /// Mark one task as finished.
    pub fn inc(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Finish and clear the progress bar.
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

fn should_show_progress(is_tty: bool, disabled: bool) -> bool {
    is_tty && !disabled
}

fn create_progress_bar() -> ProgressBar {
    let style = ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("⣿⣀ "); // Braille pattern: filled, current, empty
    let pb = ProgressBar::new(0);
    pb.set_style(style);
    pb
}
