//! Durable, ordered, deduplicated storage for checkout history and branch
//! descriptions, scoped to one repository.
//!
//! State lives under `<repo-root>/.git/checkouts_cache_plugin/` in two flat
//! files: `checkouts.db` (one branch name per line, most-recent-first) and
//! `branches.db` (one JSON record per line, most-recent-first). Every
//! mutation is a full read-modify-write of the backing file with no
//! locking, so concurrent invocations against the same repository can race;
//! last writer wins.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

const PLUGIN_DIR: &str = "checkouts_cache_plugin";
const CHECKOUTS_FILE: &str = "checkouts.db";
const BRANCHES_FILE: &str = "branches.db";

/// A branch created through this tool, with its free-text description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchRecord {
    pub name: String,
    pub description: String,
}

/// Owns the two persisted artifacts and is their sole writer.
pub struct HistoryStore {
    checkouts_path: PathBuf,
    branches_path: PathBuf,
}

impl HistoryStore {
    /// Open the store for a repository, creating the plugin directory and
    /// both backing files on first use.
    pub fn open(repo_root: &Path) -> Result<Self> {
        let dir = repo_root.join(".git").join(PLUGIN_DIR);
        fs::create_dir_all(&dir).map_err(|source| Error::StorageUnavailable {
            path: dir.clone(),
            source,
        })?;

        let store = Self {
            checkouts_path: dir.join(CHECKOUTS_FILE),
            branches_path: dir.join(BRANCHES_FILE),
        };

        for path in [&store.checkouts_path, &store.branches_path] {
            if !path.exists() {
                fs::write(path, "").map_err(|source| Error::StorageUnavailable {
                    path: path.clone(),
                    source,
                })?;
            }
        }

        Ok(store)
    }

    /// Record a checkout of `name`, moving it to the front of the history.
    ///
    /// Any prior occurrence is dropped first, so the history never holds a
    /// name twice and repeated checkouts of the same branch are idempotent.
    pub fn record_checkout(&self, name: &str) -> Result<()> {
        let mut checkouts: Vec<String> = self
            .checkouts()?
            .into_iter()
            .filter(|branch| branch != name)
            .collect();
        checkouts.insert(0, name.to_string());

        log::debug!("recording checkout of '{name}' ({} entries)", checkouts.len());
        self.write_lines(&self.checkouts_path, &checkouts)
    }

    /// Drop every occurrence of `name` from the history. No-op if absent.
    pub fn remove_checkout(&self, name: &str) -> Result<()> {
        let checkouts: Vec<String> = self
            .checkouts()?
            .into_iter()
            .filter(|branch| branch != name)
            .collect();

        log::debug!("removing '{name}' from history ({} entries left)", checkouts.len());
        self.write_lines(&self.checkouts_path, &checkouts)
    }

    /// Record a newly created branch with its description.
    ///
    /// Creation and later updates share last-write-wins semantics: prior
    /// records for the same name are dropped, so `branches.db` holds at
    /// most one record per name.
    pub fn record_branch(&self, name: &str, description: &str) -> Result<()> {
        self.set_branch_description(name, description)
    }

    /// Replace the description stored for `name`.
    pub fn set_branch_description(&self, name: &str, description: &str) -> Result<()> {
        let mut records: Vec<BranchRecord> = self
            .branches()?
            .into_iter()
            .filter(|record| record.name != name)
            .collect();
        records.insert(
            0,
            BranchRecord {
                name: name.to_string(),
                description: description.to_string(),
            },
        );

        let lines = records
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to serialize branch records")?;
        self.write_lines(&self.branches_path, &lines)
    }

    /// The full checkout history, most-recent-first.
    pub fn checkouts(&self) -> Result<Vec<String>> {
        self.read_lines(&self.checkouts_path)
    }

    /// All branch records, most-recently-written-first.
    pub fn branches(&self) -> Result<Vec<BranchRecord>> {
        let mut records = Vec::new();
        for (idx, line) in self.read_lines(&self.branches_path)?.iter().enumerate() {
            let record = serde_json::from_str(line).map_err(|_| Error::CorruptState {
                file: self.branches_path.clone(),
                line: idx + 1,
            })?;
            records.push(record);
        }
        Ok(records)
    }

    /// Branch descriptions keyed by name; on duplicates the most recent
    /// record wins.
    pub fn descriptions(&self) -> Result<HashMap<String, String>> {
        let mut map = HashMap::new();
        for record in self.branches()? {
            map.entry(record.name).or_insert(record.description);
        }
        Ok(map)
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let text = fs::read_to_string(path).map_err(|source| Error::StorageUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty artifact is an empty sequence, not [""].
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(text.lines().map(|line| line.to_string()).collect())
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<()> {
        fs::write(path, lines.join("\n")).map_err(|source| {
            Error::StorageUnavailable {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }
}
