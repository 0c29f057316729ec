//! Configuration loading functions.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::error::ConfigError;
use super::types::Config;

/// Project-level config file names, in lookup order.
const PROJECT_CONFIG_FILES: &[&str] = &[
    ".git-scraper.yaml",
    ".git-scraper.yml",
    ".git-scraper.json",
    ".git-scraper.toml",
];

impl Config {
    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| ConfigError::parse(path, "YAML", e))
            }
            "json" => serde_json::from_str(&content).map_err(|e| ConfigError::parse(path, "JSON", e)),
            "toml" => toml::from_str(&content).map_err(|e| ConfigError::parse(path, "TOML", e)),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: ext,
            }),
        }
    }

    /// Load configuration from the project directory or global config.
    ///
    /// Search order:
    /// 1. `.git-scraper.{yaml,yml,json,toml}` in project root
    /// 2. `~/.config/git-scraper/config.yaml`
    /// 3. Default configuration
    ///
    /// A discovered file that fails to load is skipped with a warning.
    pub fn load(project_root: Option<&Path>) -> Self {
        if let Some(root) = project_root {
            for filename in PROJECT_CONFIG_FILES {
                let path = root.join(filename);
                if path.exists()
                    && let Some(config) = Self::try_discovered(&path)
                {
                    return config;
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global_config = config_dir.join("git-scraper").join("config.yaml");
            if global_config.exists()
                && let Some(config) = Self::try_discovered(&global_config)
            {
                return config;
            }
        }

        Self::default()
    }

    /// Load the explicit `--config` file if given, otherwise search as [`Config::load`].
    ///
    /// Errors in an explicitly named file are fatal.
    pub fn resolve(explicit: Option<&Path>, project_root: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                let config = Self::from_file(path)?;
                debug!(path = %path.display(), "Loaded config file");
                Ok(config)
            }
            None => Ok(Self::load(project_root)),
        }
    }

    fn try_discovered(path: &Path) -> Option<Self> {
        match Self::from_file(path) {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded config file");
                Some(config)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring invalid config file");
                None
            }
        }
    }
}
