//! Error types for sitesweep
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for sitesweep operations
pub type SweepResult<T> = Result<T, SweepError>;

/// A single path that could not be deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Main error type for sitesweep operations
#[derive(Error, Debug)]
pub enum SweepError {
    /// Listing the destination tree failed; nothing was deleted
    #[error("failed to list {root}: {source}")]
    Listing {
        root: PathBuf,
        #[source]
        source: FsError,
    },

    /// An output item resolved to a path the cleaner cannot reason about
    #[error("output '{path}' cannot be resolved: {reason}")]
    UnresolvedOutput { path: PathBuf, reason: String },

    /// One or more obsolete paths could not be deleted
    #[error("{}", describe_deletion(.failures, .deleted))]
    Deletion {
        failures: Vec<DeletionFailure>,
        deleted: usize,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_deletion(failures: &[DeletionFailure], deleted: &usize) -> String {
    let mut message = format!(
        "failed to delete {} of {} obsolete paths",
        failures.len(),
        failures.len() + deleted
    );
    if let Some(first) = failures.first() {
        message.push_str(&format!(" (first: {}: {})", first.path.display(), first.message));
    }
    message
}
