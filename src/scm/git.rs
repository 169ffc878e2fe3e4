//! Git backend using CLI commands.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::Error;

use super::Vcs;

/// Git implementation shelling out to the git CLI.
///
/// Carries an explicit working directory so callers (and tests) never
/// depend on the process-wide current directory.
pub struct GitVcs {
    workdir: PathBuf,
}

impl GitVcs {
    /// Bind to the current working directory.
    pub fn discover() -> Result<Self> {
        let workdir = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self { workdir })
    }

    /// Bind to an explicit working directory.
    pub fn at(path: &Path) -> Self {
        Self {
            workdir: path.to_path_buf(),
        }
    }

    /// Run a git command and return stdout as a trimmed string.
    fn run_git(&self, args: &[&str]) -> Result<String> {
        log::debug!("running git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .with_context(|| format!("Failed to run 'git {}'", args.join(" ")))?;

        if !output.status.success() {
            return Err(Error::VcsOperationFailed {
                op: args.join(" "),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Run a git command, returning Ok if it succeeds (ignoring stdout).
    fn run_git_ok(&self, args: &[&str]) -> Result<()> {
        self.run_git(args)?;
        Ok(())
    }
}

impl Vcs for GitVcs {
    fn root(&self) -> Result<PathBuf> {
        let root = self
            .run_git(&["rev-parse", "--show-toplevel"])
            .map_err(|_| Error::NotARepository)?;
        Ok(PathBuf::from(root))
    }

    fn checkout(&self, name: &str) -> Result<()> {
        self.run_git_ok(&["checkout", name])
    }

    fn create_branch(&self, name: &str) -> Result<()> {
        self.run_git_ok(&["checkout", "-b", name])
    }
}
