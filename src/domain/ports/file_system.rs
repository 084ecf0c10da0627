//! FileSystem port - abstraction over the listing and delete primitives
//!
//! The cleaner never touches the disk directly; everything goes through
//! this trait so the set algebra can be exercised against in-memory trees.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Convert an I/O error, remembering which path it was raised for.
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test doubles backed by an in-memory tree
pub trait FileSystem {
    /// List every file and directory below `root`, depth-first.
    ///
    /// `root` itself is not part of the result. A missing `root` yields an
    /// empty list rather than an error. Dotfiles are only listed when
    /// `include_hidden` is set.
    fn list_tree(&self, root: &Path, include_hidden: bool) -> FsResult<Vec<PathBuf>>;

    /// Check if `path` is a regular file (not a directory)
    fn is_file(&self, path: &Path) -> bool;

    /// Remove a file or a whole directory tree.
    ///
    /// A path that is already absent counts as removed.
    fn remove_all(&self, path: &Path) -> FsResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn list_tree(&self, root: &Path, include_hidden: bool) -> FsResult<Vec<PathBuf>> {
        (**self).list_tree(root, include_hidden)
    }

    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn remove_all(&self, path: &Path) -> FsResult<()> {
        (**self).remove_all(path)
    }
}
