//! Remote repository cloning
//!
//! Clones a list of Git repositories into a shared destination directory
//! so that the scan engine can walk them as one tree.
//!
//! # Security Measures
//!
//! - Clones are shallow (depth=1) unless configured otherwise
//! - Git hooks are disabled during clone to prevent code execution
//! - The destination directory is removed when the run ends
//! - Authentication tokens are not logged or exposed

pub mod batch;
pub mod clone;
pub mod error;
pub mod workspace;

pub use batch::{CloneBatch, CloneFailure, CloneReport, DEFAULT_CLONE_WORKERS};
pub use clone::{ClonedRepo, GitCloner, repo_dir_name, validate_url};
pub use error::RemoteError;
pub use workspace::CloneWorkspace;
