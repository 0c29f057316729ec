//! Effective settings: CLI flags layered over the loaded [`Config`].

use super::error::ConfigError;
use super::types::{Config, ReportFormat};
use crate::cli::Cli;
use crate::discovery::WalkConfig;
use crate::engine::{ContextRadius, CoordinatorConfig};
use crate::remote::{CloneBatch, GitCloner};
use crate::types::AuthToken;

/// Settings for one run after merging CLI and config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub scan_workers: usize,
    pub radius: ContextRadius,
    pub follow_symlinks: bool,
    pub exclude_dirs: Vec<String>,
    pub clone_workers: usize,
    pub clone_depth: Option<u32>,
    pub format: ReportFormat,
    pub title: String,
    pub auth_token: Option<AuthToken>,
}

impl Settings {
    /// Merge `cli` over `config`. CLI values win when present.
    pub fn from_cli(cli: &Cli, config: Config) -> Result<Self, ConfigError> {
        let mut exclude_dirs = config.scan.exclude_dirs;
        for name in &cli.exclude {
            if !exclude_dirs.contains(name) {
                exclude_dirs.push(name.clone());
            }
        }

        let settings = Self {
            scan_workers: cli.workers.unwrap_or(config.scan.workers),
            radius: ContextRadius::new(
                cli.before.unwrap_or(config.scan.context_before),
                cli.after.unwrap_or(config.scan.context_after),
            ),
            follow_symlinks: cli.follow_symlinks || config.scan.follow_symlinks,
            exclude_dirs,
            clone_workers: cli.clone_workers.unwrap_or(config.clone.workers),
            clone_depth: config.clone.depth,
            format: cli.format.unwrap_or(config.report.format),
            title: config.report.title,
            auth_token: cli.auth_token.as_deref().map(AuthToken::new),
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.scan_workers == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scan.workers",
                message: "must be at least 1".to_string(),
            });
        }
        if self.clone_workers == 0 {
            return Err(ConfigError::InvalidValue {
                field: "clone.workers",
                message: "must be at least 1".to_string(),
            });
        }
        if self.clone_depth == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "clone.depth",
                message: "must be at least 1, or null for full history".to_string(),
            });
        }
        Ok(())
    }

    /// Scan pass configuration for the coordinator.
    pub fn coordinator_config(&self) -> CoordinatorConfig {
        CoordinatorConfig::default()
            .with_workers(self.scan_workers)
            .with_radius(self.radius)
            .with_walk(
                WalkConfig::new()
                    .with_exclude_dirs(self.exclude_dirs.iter().cloned())
                    .with_follow_symlinks(self.follow_symlinks),
            )
    }

    /// Clone batch configured with depth, token and concurrency.
    pub fn clone_batch(&self) -> CloneBatch {
        let cloner = GitCloner::new()
            .with_depth(self.clone_depth)
            .with_auth_token(self.auth_token.clone());
        CloneBatch::new(cloner).with_workers(self.clone_workers)
    }
}
