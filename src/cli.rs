use crate::config::ReportFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "git-scraper",
    version,
    about = "Clone repositories in bulk and report every line that mentions a keyword",
    long_about = "git-scraper clones a list of Git repositories, scans every file for a list of \
                  case-insensitive keywords, and writes a report that shows each match with its \
                  surrounding lines, grouped and filterable by keyword."
)]
pub struct Cli {
    /// File with one repository URL per line (blank lines and '#' comments ignored)
    #[arg(short, long, value_name = "FILE", conflicts_with = "root")]
    pub repos: Option<PathBuf>,

    /// File with one keyword per line
    #[arg(short, long, value_name = "FILE")]
    pub keywords: Option<PathBuf>,

    /// Directory to clone into; must be absent or empty, removed after the run
    #[arg(short, long, value_name = "DIR", conflicts_with = "root")]
    pub dest: Option<PathBuf>,

    /// Report file to write
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Scan an existing directory instead of cloning
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Number of scan worker threads
    #[arg(short = 'j', long, value_name = "N")]
    pub workers: Option<usize>,

    /// Number of concurrent clones
    #[arg(long, value_name = "N")]
    pub clone_workers: Option<usize>,

    /// Context lines shown before each match
    #[arg(short = 'B', long, value_name = "LINES")]
    pub before: Option<usize>,

    /// Context lines shown after each match
    #[arg(short = 'A', long, value_name = "LINES")]
    pub after: Option<usize>,

    /// Follow symbolic links while walking; without it symlinked files and
    /// directories are skipped
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Directory names to skip (repeatable)
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Path to a configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Token used for private GitHub repositories
    #[arg(long, env = "GIT_SCRAPER_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,

    /// Leave the clone destination on disk after the run
    #[arg(long, conflicts_with = "root")]
    pub keep_clones: bool,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Verbose logging (debug level)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default log filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
