use super::error::RemoteError;
use crate::types::AuthToken;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Result of a successful clone operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonedRepo {
    /// Path to the cloned repository
    pub path: PathBuf,
    /// Original repository URL
    pub url: String,
}

/// Git repository cloner with security measures
#[derive(Debug, Clone)]
pub struct GitCloner {
    /// Optional authentication token for private repositories
    auth_token: Option<AuthToken>,
    /// History depth; None clones the full history
    depth: Option<u32>,
}

impl Default for GitCloner {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCloner {
    /// Create a new GitCloner with default settings (shallow, unauthenticated)
    pub fn new() -> Self {
        Self {
            auth_token: None,
            depth: Some(1),
        }
    }

    /// Set authentication token for private repositories
    pub fn with_auth_token(mut self, token: Option<AuthToken>) -> Self {
        self.auth_token = token.filter(|t| !t.is_empty());
        self
    }

    /// Set clone depth (None for full history)
    pub fn with_depth(mut self, depth: Option<u32>) -> Self {
        self.depth = depth;
        self
    }

    /// Clone `url` into `destination`, which must not exist yet.
    ///
    /// Security measures:
    /// - Shallow clone unless configured otherwise
    /// - Disables git hooks (template and local)
    /// - Skips tags and other branches
    pub fn clone_into(&self, url: &str, destination: &Path) -> Result<ClonedRepo, RemoteError> {
        validate_url(url)?;
        self.check_git_available()?;

        let clone_url = self.build_clone_url(url);
        self.execute_clone(url, &clone_url, destination)?;

        debug!(url, path = %destination.display(), "Repository cloned");

        Ok(ClonedRepo {
            path: destination.to_path_buf(),
            url: url.to_string(),
        })
    }

    /// Check if git command is available
    fn check_git_available(&self) -> Result<(), RemoteError> {
        Command::new("git")
            .arg("--version")
            .output()
            .map_err(|_| RemoteError::GitNotFound)?;
        Ok(())
    }

    /// Build clone URL with authentication if needed
    fn build_clone_url(&self, url: &str) -> String {
        if let Some(ref token) = self.auth_token
            && url.starts_with("https://github.com/")
        {
            return url.replacen(
                "https://github.com/",
                &format!("https://{}@github.com/", token.as_str()),
                1,
            );
        }
        url.to_string()
    }

    /// Execute git clone command with security measures.
    ///
    /// `url` is the user-facing URL used in errors; `clone_url` may carry a token.
    fn execute_clone(&self, url: &str, clone_url: &str, path: &Path) -> Result<(), RemoteError> {
        let mut cmd = Command::new("git");

        // Disable hooks for security
        cmd.env("GIT_TEMPLATE_DIR", "");
        // Never block on a credential prompt
        cmd.env("GIT_TERMINAL_PROMPT", "0");

        cmd.args([
            "-c",
            "core.hooksPath=/dev/null",
            "-c",
            "advice.detachedHead=false",
            "clone",
            "--quiet",
            "--single-branch",
            "--no-tags",
        ]);

        if let Some(depth) = self.depth {
            cmd.args(["--depth", &depth.to_string()]);
        }

        cmd.arg(clone_url);
        cmd.arg(path);

        let output = cmd.output().map_err(|e| RemoteError::CloneFailed {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = redact(&String::from_utf8_lossy(&output.stderr), clone_url, url);

            if stderr.contains("Repository not found") || stderr.contains("404") {
                return Err(RemoteError::NotFound(url.to_string()));
            }

            if stderr.contains("Authentication failed")
                || stderr.contains("could not read Username")
                || stderr.contains("terminal prompts disabled")
            {
                return Err(RemoteError::AuthRequired(url.to_string()));
            }

            return Err(RemoteError::CloneFailed {
                url: url.to_string(),
                message: stderr.trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Validate the repository URL format
pub fn validate_url(url: &str) -> Result<(), RemoteError> {
    const SCHEMES: &[&str] = &["https://", "http://", "ssh://", "git@", "file://"];

    if url.chars().any(char::is_whitespace) {
        return Err(RemoteError::InvalidUrl(format!(
            "URL must not contain whitespace: {}",
            url
        )));
    }

    if !SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        return Err(RemoteError::InvalidUrl(format!(
            "URL must start with one of {}: {}",
            SCHEMES.join(", "),
            url
        )));
    }

    if repo_dir_name(url).is_none() {
        return Err(RemoteError::InvalidUrl(format!(
            "URL has no repository name: {}",
            url
        )));
    }

    Ok(())
}

/// Directory name for a clone of `url`: its last path segment without `.git`.
pub fn repo_dir_name(url: &str) -> Option<String> {
    let trimmed = url.trim_end_matches('/');
    let last = trimmed.rsplit(['/', ':']).next()?;
    let name = last.strip_suffix(".git").unwrap_or(last);

    if name.is_empty() || name == "." || name == ".." || name.contains('@') {
        return None;
    }
    Some(name.to_string())
}

/// Remove an embedded token from git's error output.
fn redact(message: &str, clone_url: &str, url: &str) -> String {
    if clone_url == url {
        message.to_string()
    } else {
        message.replace(clone_url, url)
    }
}
