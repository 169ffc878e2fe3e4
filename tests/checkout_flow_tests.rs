//! Full command-flow tests against a real on-disk store and a fake
//! version-control backend, so no git processes are spawned.

use std::cell::RefCell;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use git_recent::commands::{CheckoutManager, Command};
use git_recent::error::Error;
use git_recent::scm::Vcs;
use git_recent::store::HistoryStore;

/// Fake backend that records calls and never touches a working tree.
struct FakeVcs {
    calls: RefCell<Vec<String>>,
}

impl FakeVcs {
    fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Vcs for FakeVcs {
    fn root(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/fake"))
    }

    fn checkout(&self, name: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("checkout {name}"));
        Ok(())
    }

    fn create_branch(&self, name: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("create {name}"));
        Ok(())
    }
}

fn dispatch(temp: &TempDir, vcs: &FakeVcs, command: Command) -> Result<()> {
    let store = HistoryStore::open(temp.path())?;
    CheckoutManager::new(store, vcs).dispatch(command)
}

fn checkouts(temp: &TempDir) -> Vec<String> {
    HistoryStore::open(temp.path()).unwrap().checkouts().unwrap()
}

#[test]
fn test_create_then_hop_back_scenario() {
    let temp = TempDir::new().unwrap();
    let vcs = FakeVcs::new();

    // Two branches created through the tool, most recent first.
    dispatch(
        &temp,
        &vcs,
        Command::CreateBranch {
            name: "feature-a".to_string(),
            description: "first".to_string(),
        },
    )
    .unwrap();
    assert_eq!(checkouts(&temp), vec!["feature-a"]);

    dispatch(
        &temp,
        &vcs,
        Command::CreateBranch {
            name: "feature-b".to_string(),
            description: "second".to_string(),
        },
    )
    .unwrap();
    assert_eq!(checkouts(&temp), vec!["feature-b", "feature-a"]);

    // "-" hops to the previous checkout, promoting it back to the front.
    dispatch(&temp, &vcs, Command::SwitchTo("-".to_string())).unwrap();
    assert_eq!(checkouts(&temp), vec!["feature-a", "feature-b"]);

    assert_eq!(
        vcs.calls(),
        vec!["create feature-a", "create feature-b", "checkout feature-a"]
    );

    let store = HistoryStore::open(temp.path()).unwrap();
    let descriptions = store.descriptions().unwrap();
    assert_eq!(descriptions.get("feature-a"), Some(&"first".to_string()));
    assert_eq!(descriptions.get("feature-b"), Some(&"second".to_string()));
}

#[test]
fn test_delete_current_switches_away_first() {
    let temp = TempDir::new().unwrap();
    let vcs = FakeVcs::new();

    let store = HistoryStore::open(temp.path()).unwrap();
    store.record_checkout("feature-b").unwrap();
    store.record_checkout("feature-a").unwrap();
    assert_eq!(checkouts(&temp), vec!["feature-a", "feature-b"]);

    dispatch(&temp, &vcs, Command::DeleteOrdinal(0)).unwrap();

    // Moved off "feature-a" before removing it entirely.
    assert_eq!(vcs.calls(), vec!["checkout feature-b"]);
    assert_eq!(checkouts(&temp), vec!["feature-b"]);
}

#[test]
fn test_delete_older_entry_keeps_current() {
    let temp = TempDir::new().unwrap();
    let vcs = FakeVcs::new();

    let store = HistoryStore::open(temp.path()).unwrap();
    store.record_checkout("feature-b").unwrap();
    store.record_checkout("feature-a").unwrap();

    dispatch(&temp, &vcs, Command::DeleteOrdinal(1)).unwrap();

    assert!(vcs.calls().is_empty());
    assert_eq!(checkouts(&temp), vec!["feature-a"]);
}

#[test]
fn test_set_description_targets_ordinal_entry() {
    let temp = TempDir::new().unwrap();
    let vcs = FakeVcs::new();

    let store = HistoryStore::open(temp.path()).unwrap();
    store.record_checkout("feature-b").unwrap();
    store.record_checkout("feature-a").unwrap();

    dispatch(
        &temp,
        &vcs,
        Command::SetDescription {
            ordinal: 1,
            description: "older work".to_string(),
        },
    )
    .unwrap();

    let descriptions = store.descriptions().unwrap();
    assert_eq!(descriptions.get("feature-b"), Some(&"older work".to_string()));
    assert_eq!(descriptions.get("feature-a"), None);
}

#[test]
fn test_set_description_out_of_range() {
    let temp = TempDir::new().unwrap();
    let vcs = FakeVcs::new();

    let err = dispatch(
        &temp,
        &vcs,
        Command::SetDescription {
            ordinal: 0,
            description: "nothing here".to_string(),
        },
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::UnknownOrdinal { ordinal: 0, len: 0 })
    ));
}

#[test]
fn test_switch_to_previous_with_single_entry_fails() {
    let temp = TempDir::new().unwrap();
    let vcs = FakeVcs::new();

    HistoryStore::open(temp.path())
        .unwrap()
        .record_checkout("main")
        .unwrap();

    let err = dispatch(&temp, &vcs, Command::SwitchTo("-".to_string())).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::UnknownOrdinal { ordinal: 1, len: 1 })
    ));
    assert!(vcs.calls().is_empty());
}

#[test]
fn test_list_never_mutates() {
    let temp = TempDir::new().unwrap();
    let vcs = FakeVcs::new();

    let store = HistoryStore::open(temp.path()).unwrap();
    store.record_checkout("main").unwrap();
    store.record_branch("main", "trunk").unwrap();

    dispatch(&temp, &vcs, Command::List).unwrap();

    assert!(vcs.calls().is_empty());
    assert_eq!(checkouts(&temp), vec!["main"]);
    assert_eq!(store.branches().unwrap().len(), 1);
}
