//! Clean result types

use std::path::PathBuf;

/// Result of a successful cleanup run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Every path found obsolete, sorted
    pub obsolete: Vec<PathBuf>,
    /// Paths that were deleted (empty on a dry run)
    pub deleted: Vec<PathBuf>,
    /// Files removed because the build needs a directory in their place
    pub replaced: Vec<PathBuf>,
    /// Whether deletion was skipped
    pub dry_run: bool,
}

impl CleanReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Whether the destination already matched the build
    pub fn is_clean(&self) -> bool {
        self.obsolete.is_empty()
    }

    /// Paths deleted, or that would be deleted on a dry run
    pub fn affected(&self) -> &[PathBuf] {
        if self.dry_run {
            &self.obsolete
        } else {
            &self.deleted
        }
    }
}
