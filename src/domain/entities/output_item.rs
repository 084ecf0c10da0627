//! OutputItem entity - one unit of generated content
//!
//! A build declares each file it is about to write as an `OutputItem`.
//! Items either carry their destination directly or compute it from the
//! destination root on demand.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::normalize_lexically;
use crate::error::{SweepError, SweepResult};

type DestinationFn = dyn Fn(&Path) -> PathBuf + Send + Sync;

/// A file the current build will produce
pub enum OutputItem {
    /// Destination already known; relative paths are taken relative to the root
    Direct(PathBuf),
    /// Destination computed from the destination root
    Computed(Box<DestinationFn>),
}

impl OutputItem {
    /// Create an item with a precomputed destination
    pub fn direct(path: impl Into<PathBuf>) -> Self {
        OutputItem::Direct(path.into())
    }

    /// Create an item whose destination is derived from the root
    pub fn computed<F>(destination: F) -> Self
    where
        F: Fn(&Path) -> PathBuf + Send + Sync + 'static,
    {
        OutputItem::Computed(Box::new(destination))
    }

    /// Resolve to a normalized absolute destination under `root`.
    ///
    /// Fails when the destination is the root itself or lies outside it:
    /// such an item can't be a file the build writes into `root`, and
    /// skipping it could delete something the build means to keep.
    pub fn resolve(&self, root: &Path) -> SweepResult<PathBuf> {
        let raw = match self {
            OutputItem::Direct(path) => root.join(path),
            OutputItem::Computed(destination) => destination(root),
        };
        let resolved = normalize_lexically(&raw);
        let root = normalize_lexically(root);

        if resolved == root {
            return Err(SweepError::UnresolvedOutput {
                path: raw,
                reason: "resolves to the destination root itself".to_string(),
            });
        }
        if !resolved.starts_with(&root) {
            return Err(SweepError::UnresolvedOutput {
                path: raw,
                reason: format!("outside destination {}", root.display()),
            });
        }

        Ok(resolved)
    }
}

impl fmt::Debug for OutputItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputItem::Direct(path) => f.debug_tuple("Direct").field(path).finish(),
            OutputItem::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl From<PathBuf> for OutputItem {
    fn from(path: PathBuf) -> Self {
        OutputItem::Direct(path)
    }
}

impl From<&str> for OutputItem {
    fn from(path: &str) -> Self {
        OutputItem::Direct(PathBuf::from(path))
    }
}
