//! Protected paths value object
//!
//! Built from the configured keep fragments (e.g. `.git`) joined onto the
//! destination root. A path is protected when it equals, or lies beneath,
//! one of those joined paths. Every directory that contains a protected
//! path is recorded too, so a nested keep like `assets/robots.txt` also
//! shields `assets` from recursive deletion.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::path::{ancestors_below, normalize_lexically};

#[derive(Debug, Clone, Default)]
pub struct ProtectedPaths {
    roots: Vec<PathBuf>,
    directories: HashSet<PathBuf>,
}

impl ProtectedPaths {
    /// Join each fragment onto `root`.
    ///
    /// Blank fragments are ignored, and so are fragments that climb out of
    /// the root. A fragment resolving to the root itself (`.`, `/`,
    /// `assets/..`) protects the whole destination.
    pub fn new<S: AsRef<str>>(root: &Path, fragments: &[S]) -> Self {
        let root = normalize_lexically(root);
        let mut roots = Vec::new();
        let mut directories = HashSet::new();

        for fragment in fragments {
            let fragment = fragment.as_ref().trim();
            if fragment.is_empty() {
                continue;
            }
            let fragment = fragment.trim_start_matches(['/', '\\']);
            let protected = normalize_lexically(&root.join(fragment));
            if !protected.starts_with(&root) {
                continue;
            }
            directories.extend(ancestors_below(&protected, &root));
            roots.push(protected);
        }

        Self { roots, directories }
    }

    /// Whether `path` is, or is nested under, a protected path
    pub fn matches(&self, path: &Path) -> bool {
        self.roots.iter().any(|protected| path.starts_with(protected))
    }

    /// Whether `path` is a directory containing a protected path
    pub fn is_protected_directory(&self, path: &Path) -> bool {
        self.directories.contains(path)
    }

    /// Whether `path` must never enter the deletion set
    pub fn shields(&self, path: &Path) -> bool {
        self.matches(path) || self.is_protected_directory(path)
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }
}
