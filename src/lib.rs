//! # git-recent
//!
//! A `git checkout` helper that remembers which branches you visited, in
//! most-recently-used order, so you can jump back by position ("the branch
//! I was on 3 checkouts ago") instead of by name, in the spirit of shell
//! `cd -`. Branches created through the tool can carry a free-text
//! description that shows up next to the name in the history table.
//!
//! State is two flat files under the repository's own
//! `.git/checkouts_cache_plugin/` directory, so every clone keeps its own
//! history and nothing leaks into the working tree.

/// Command dispatch: translates one resolved command into git calls and
/// history-store mutations.
pub mod commands;

/// The error taxonomy surfaced to the user.
pub mod error;

/// Console logging setup (`RUST_LOG`-controlled).
pub mod logger;

/// Version-control abstraction and the git CLI backend.
pub mod scm;

/// Persistence of the checkout history and branch descriptions.
pub mod store;

/// Fixed-width rendering of the history table.
pub mod table;
