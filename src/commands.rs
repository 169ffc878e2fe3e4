//! Command dispatch: translates one resolved command into version-control
//! calls and history-store mutations.
//!
//! Mutation ordering is load-bearing: the external, non-reversible git
//! action always runs first, and the idempotent store update second, so a
//! failed git call leaves persisted state untouched.

use anyhow::Result;
use colored::Colorize;

use crate::error::Error;
use crate::scm::Vcs;
use crate::store::HistoryStore;
use crate::table;

/// One resolved invocation. The CLI layer guarantees the user selected at
/// most one of these per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch to a branch by name; `-` means the previous checkout.
    SwitchTo(String),
    /// Switch to the checkout at a zero-based history position.
    SwitchToOrdinal(usize),
    /// Create a branch with a description and switch to it.
    CreateBranch { name: String, description: String },
    /// Remove the checkout at a history position from the history.
    DeleteOrdinal(usize),
    /// Set the description of the branch at a history position.
    SetDescription { ordinal: usize, description: String },
    /// Print the history table.
    List,
}

/// Orchestrates one command against the store and the version-control tool.
pub struct CheckoutManager<'a> {
    store: HistoryStore,
    vcs: &'a dyn Vcs,
    limit: usize,
}

impl<'a> CheckoutManager<'a> {
    pub fn new(store: HistoryStore, vcs: &'a dyn Vcs) -> Self {
        Self {
            store,
            vcs,
            limit: table::DEFAULT_LIMIT,
        }
    }

    /// Cap the number of rows the history table shows.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn dispatch(&self, command: Command) -> Result<()> {
        match command {
            Command::SwitchTo(name) => self.switch_to(&name),
            Command::SwitchToOrdinal(ordinal) => self.switch_to_ordinal(ordinal),
            Command::CreateBranch { name, description } => {
                self.create_branch(&name, &description)
            }
            Command::DeleteOrdinal(ordinal) => self.delete_ordinal(ordinal),
            Command::SetDescription {
                ordinal,
                description,
            } => self.set_description(ordinal, &description),
            Command::List => self.list(),
        }
    }

    fn switch_to(&self, name: &str) -> Result<()> {
        // The shell-style shorthand: "-" is the previous checkout.
        if name == "-" {
            return self.switch_to_ordinal(1);
        }

        self.vcs.checkout(name)?;
        self.store.record_checkout(name)
    }

    fn switch_to_ordinal(&self, ordinal: usize) -> Result<()> {
        let name = self.resolve_ordinal(ordinal)?;
        self.switch_to(&name)
    }

    fn create_branch(&self, name: &str, description: &str) -> Result<()> {
        self.vcs.create_branch(name)?;
        self.store.record_branch(name, description)?;
        self.store.record_checkout(name)
    }

    fn delete_ordinal(&self, ordinal: usize) -> Result<()> {
        let name = self.resolve_ordinal(ordinal)?;

        if ordinal == 0 {
            if self.store.checkouts()?.len() < 2 {
                return Err(Error::CannotDeleteLastCheckout.into());
            }
            // Move off the entry before dropping it.
            self.switch_to_ordinal(1)?;
        }

        self.store.remove_checkout(&name)?;
        self.list()
    }

    fn set_description(&self, ordinal: usize, description: &str) -> Result<()> {
        let name = self.resolve_ordinal(ordinal)?;
        self.store.set_branch_description(&name, description)?;
        self.list()
    }

    fn list(&self) -> Result<()> {
        let checkouts = self.store.checkouts()?;
        let descriptions = self.store.descriptions()?;

        if let Some(rendered) = table::render(&checkouts, &descriptions, self.limit) {
            println!("{rendered}");
            if checkouts.len() > self.limit {
                println!(
                    "{} showing {} of {} checkouts",
                    "note:".yellow(),
                    self.limit,
                    checkouts.len()
                );
            }
        }
        Ok(())
    }

    /// Resolve a zero-based history position to its branch name.
    fn resolve_ordinal(&self, ordinal: usize) -> Result<String> {
        let checkouts = self.store.checkouts()?;
        checkouts.get(ordinal).cloned().ok_or_else(|| {
            Error::UnknownOrdinal {
                ordinal,
                len: checkouts.len(),
            }
            .into()
        })
    }
}
