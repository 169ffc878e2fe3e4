//! Version-control abstraction layer.
//!
//! The checkout manager needs exactly three capabilities from the
//! version-control tool; they are modeled as a trait so tests can inject a
//! fake instead of spawning real processes.

mod git;

use anyhow::Result;
use std::path::PathBuf;
use std::process::{Command, Stdio};

pub use git::GitVcs;

/// The version-control operations the checkout manager depends on.
pub trait Vcs {
    /// Absolute path of the enclosing repository's top-level directory.
    fn root(&self) -> Result<PathBuf>;

    /// Switch the working tree to an existing branch.
    fn checkout(&self, name: &str) -> Result<()>;

    /// Create a new branch and switch to it.
    fn create_branch(&self, name: &str) -> Result<()>;
}

/// Check whether the git CLI is available on PATH.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
