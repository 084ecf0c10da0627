//! Lexical path helpers
//!
//! Paths in the cleaner's sets are compared as values, so every path that
//! enters a set goes through `normalize_lexically` first. No filesystem
//! access happens here; symlinks are not resolved.

use std::path::{Component, Path, PathBuf};

/// Remove `.` components and fold `..` into the preceding component.
///
/// `..` at the start of a relative path is kept; `..` directly below the
/// filesystem root is dropped, matching how the OS resolves `/..`.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

/// Whether the final textual segment is a `.` or `..` marker.
///
/// `Path::components` already folds most of these away, so the raw string
/// is checked as well.
pub fn is_self_or_parent_marker(path: &Path) -> bool {
    let text = path.to_string_lossy();
    let last = text
        .rsplit(|c| c == '/' || std::path::is_separator(c))
        .next()
        .unwrap_or("");
    last == "." || last == ".."
}

/// Every ancestor of `path` strictly between `root` and `path`.
///
/// Nearest ancestor first. Returns nothing when `path` is not below `root`.
pub fn ancestors_below(path: &Path, root: &Path) -> Vec<PathBuf> {
    if !path.starts_with(root) {
        return Vec::new();
    }
    path.ancestors()
        .skip(1)
        .take_while(|ancestor| *ancestor != root && ancestor.starts_with(root))
        .map(Path::to_path_buf)
        .collect()
}
