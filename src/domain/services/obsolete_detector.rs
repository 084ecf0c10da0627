//! Obsolete path detection
//!
//! Pure set algebra over the destination tree:
//!
//! ```text
//! obsolete = (existing - output_files - output_dirs) ∪ replaced
//! ```
//!
//! where `replaced` are output directories that currently exist as regular
//! files. Filesystem queries are injected so this stays free of I/O.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{is_self_or_parent_marker, normalize_lexically, ProtectedPaths};

/// Output files of one build plus every directory implied by them.
///
/// Computed once per cleanup and queried for every existing path.
#[derive(Debug, Clone, Default)]
pub struct OutputSet {
    files: HashSet<PathBuf>,
    directories: HashSet<PathBuf>,
}

impl OutputSet {
    /// Collect `files` (already resolved under `root`) and derive their
    /// ancestor directories, excluding `root` itself.
    ///
    /// The walk for each file stops at the first directory already seen,
    /// since everything above it was recorded by an earlier file.
    pub fn new(root: &Path, files: impl IntoIterator<Item = PathBuf>) -> Self {
        let root = normalize_lexically(root);
        let files: HashSet<PathBuf> = files.into_iter().collect();
        let mut directories = HashSet::new();

        for file in &files {
            let mut current = file.parent();
            while let Some(dir) = current {
                if dir == root || !dir.starts_with(&root) {
                    break;
                }
                if !directories.insert(dir.to_path_buf()) {
                    break;
                }
                current = dir.parent();
            }
        }

        Self { files, directories }
    }

    pub fn files(&self) -> &HashSet<PathBuf> {
        &self.files
    }

    pub fn directories(&self) -> &HashSet<PathBuf> {
        &self.directories
    }

    /// Whether the build will produce `path`, as a file or as a directory
    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains(path) || self.directories.contains(path)
    }
}

/// Outcome of comparing the destination tree against the build outputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObsoleteDetection {
    /// Every path to delete, sorted
    pub obsolete: Vec<PathBuf>,
    /// Subset of `obsolete`: files standing where the build needs a directory
    pub replaced: Vec<PathBuf>,
}

impl ObsoleteDetection {
    pub fn is_empty(&self) -> bool {
        self.obsolete.is_empty()
    }
}

/// Filter a raw listing down to the paths eligible for deletion.
///
/// Drops `.`/`..` markers unconditionally, then everything the protection
/// rules shield. Paths are normalized on the way in.
pub fn existing_files(listing: Vec<PathBuf>, protected: &ProtectedPaths) -> HashSet<PathBuf> {
    listing
        .into_iter()
        .filter(|path| !is_self_or_parent_marker(path))
        .map(|path| normalize_lexically(&path))
        .filter(|path| !protected.shields(path))
        .collect()
}

/// Compare existing paths against the build outputs.
///
/// `is_file` answers whether a path is currently a regular file on disk.
pub fn detect<F>(
    existing: &HashSet<PathBuf>,
    outputs: &OutputSet,
    protected: &ProtectedPaths,
    is_file: F,
) -> ObsoleteDetection
where
    F: Fn(&Path) -> bool,
{
    let mut replaced: Vec<PathBuf> = outputs
        .directories()
        .iter()
        .filter(|dir| !protected.matches(dir) && is_file(dir))
        .cloned()
        .collect();
    replaced.sort();

    let mut obsolete: HashSet<PathBuf> = existing
        .iter()
        .filter(|path| !outputs.contains(path))
        .cloned()
        .collect();
    obsolete.extend(replaced.iter().cloned());

    let mut obsolete: Vec<PathBuf> = obsolete.into_iter().collect();
    obsolete.sort();

    ObsoleteDetection { obsolete, replaced }
}
