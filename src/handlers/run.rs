//! The clone, scan and report pipeline behind the CLI.

use crate::cli::Cli;
use crate::config::{Config, Settings};
use crate::engine::{ScanCoordinator, ScanOutcome};
use crate::error::Result;
use crate::input::{InputSource, Prompter, SourceResolver, read_keyword_list, read_repo_list};
use crate::output::{OutputFormatter, check_writable, write_atomic};
use crate::remote::{CloneReport, CloneWorkspace};
use crate::reporter::{ReportInput, ScanProgress};
use crate::types::Keyword;
use colored::Colorize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error, info};

/// What a finished run produced.
#[derive(Debug)]
pub struct RunReport {
    pub keywords: Vec<Keyword>,
    pub outcome: ScanOutcome,
    /// Present when repositories were cloned.
    pub clones: Option<CloneReport>,
    pub report_path: PathBuf,
    /// Clone destination left on disk by `--keep-clones`.
    pub kept_clones: Option<PathBuf>,
}

/// Run normal mode: resolve inputs, clone, scan and write the report.
pub fn run_normal_mode(cli: &Cli) -> ExitCode {
    match execute(cli, SourceResolver::new()) {
        Ok(report) => {
            println!("{}", format_summary(&report));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            eprintln!("{} {}", "error:".red().bold(), e.chain());
            ExitCode::from(2)
        }
    }
}

/// Execute a full run. Every fatal error is returned before the report is
/// written; the clone destination is removed on every path out of this
/// function unless `--keep-clones` was given.
pub fn execute<P: Prompter>(cli: &Cli, mut resolver: SourceResolver<P>) -> Result<RunReport> {
    let config = Config::resolve(cli.config.as_deref(), Some(Path::new(".")))?;
    let settings = Settings::from_cli(cli, config)?;
    debug!(?settings, "Effective settings");

    let input = resolver.resolve(cli)?;
    let keywords = read_keyword_list(&input.keywords)?;
    check_writable(&input.output)?;

    let progress = ScanProgress::new(std::io::stdout().is_terminal(), cli.no_progress);
    let coordinator =
        ScanCoordinator::new(settings.coordinator_config())?.with_progress(progress);
    let formatter = OutputFormatter::new(settings.format);

    let render = |outcome: &ScanOutcome| -> Result<()> {
        let report_input = ReportInput::new(&settings.title, &keywords, outcome);
        write_atomic(&input.output, &formatter.format(&report_input))?;
        info!(path = %input.output.display(), "Report written");
        Ok(())
    };

    match &input.source {
        InputSource::Local { root } => {
            let outcome = coordinator.scan_all(root, &keywords)?;
            render(&outcome)?;
            Ok(RunReport {
                keywords,
                outcome,
                clones: None,
                report_path: input.output.clone(),
                kept_clones: None,
            })
        }
        InputSource::Clone { repos, dest } => {
            let urls = read_repo_list(repos)?;
            let workspace = CloneWorkspace::prepare(dest)?;

            println!(
                "Cloning {} repositories into {}",
                urls.len(),
                workspace.path().display()
            );
            let mut clones = settings.clone_batch().clone_all(&urls, workspace.path())?;
            if let Some(index) = clones
                .failed
                .iter()
                .position(|failure| !failure.error.is_per_repository())
            {
                return Err(clones.failed.swap_remove(index).error.into());
            }

            let outcome = coordinator.scan_all(workspace.path(), &keywords)?;
            render(&outcome)?;

            let kept_clones = cli.keep_clones.then(|| workspace.keep());
            Ok(RunReport {
                keywords,
                outcome,
                clones: Some(clones),
                report_path: input.output.clone(),
                kept_clones,
            })
        }
    }
}

/// Human-readable run summary.
pub fn format_summary(report: &RunReport) -> String {
    let mut lines = Vec::new();
    let summary = &report.outcome.summary;

    if let Some(clones) = &report.clones {
        lines.push(format!(
            "{} {} of {} repositories cloned",
            "✓".green(),
            clones.cloned.len(),
            clones.total()
        ));
        for repo in &clones.cloned {
            let dir = repo.path.file_name().unwrap_or(repo.path.as_os_str());
            lines.push(format!(
                "  {} {} -> {}",
                "✓".green(),
                repo.url,
                dir.to_string_lossy()
            ));
        }
        for failure in &clones.failed {
            lines.push(format!("  {} {}: {}", "✗".red(), failure.url, failure.error));
        }
    }

    lines.push(format!(
        "Scanned {} files ({} tasks)",
        summary.files_scanned, summary.tasks
    ));

    if !report.outcome.diagnostics.is_empty() {
        let mut unreadable: Vec<&str> = report
            .outcome
            .diagnostics
            .iter()
            .map(|d| d.path.as_str())
            .collect();
        unreadable.dedup();
        lines.push(format!(
            "{} {} files could not be read",
            "!".yellow(),
            unreadable.len()
        ));
        for path in unreadable {
            lines.push(format!("  {}", path));
        }
    }

    for count in &summary.keywords {
        lines.push(format!("  {:<24} {}", count.keyword, count.matches));
    }
    lines.push(format!(
        "{} matches in {} files",
        summary.total_matches.to_string().bold(),
        summary.files_with_matches
    ));

    if let Some(kept) = &report.kept_clones {
        lines.push(format!("Clones kept in {}", kept.display()));
    }
    lines.push(format!(
        "Report written to {}",
        report.report_path.display().to_string().cyan()
    ));

    lines.join("\n")
}
