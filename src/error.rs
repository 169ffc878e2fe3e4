use std::path::PathBuf;
use thiserror::Error;

/// Failures that reach the user as a single diagnostic and a non-zero exit.
///
/// Environment problems (`NotARepository`, `VcsToolMissing`) are checked
/// eagerly before any command runs. Git failures abort the command before
/// the store is touched. Ordinal and last-checkout guard violations are
/// ordinary reported errors, never panics.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not inside a git repository")]
    NotARepository,

    #[error("git not found on PATH")]
    VcsToolMissing,

    #[error("git {op} failed: {detail}")]
    VcsOperationFailed { op: String, detail: String },

    #[error("no checkout at position {ordinal} (history has {len} entries)")]
    UnknownOrdinal { ordinal: usize, len: usize },

    #[error("cannot delete the only remaining checkout")]
    CannotDeleteLastCheckout,

    #[error("cannot access checkout history at {}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt branch record at {}:{line}", file.display())]
    CorruptState { file: PathBuf, line: usize },
}
