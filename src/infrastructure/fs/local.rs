//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations. Listing uses
//! the `ignore` walker with every ignore-file filter switched off, so the
//! tree is reported exactly as it is on disk.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn list_tree(&self, root: &Path, include_hidden: bool) -> FsResult<Vec<PathBuf>> {
        match std::fs::metadata(root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Ok(Vec::new()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(FsError::at(root, e)),
        }

        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .hidden(!include_hidden)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut paths = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // Entry vanished between readdir and stat
                Err(e) if is_not_found(&e) => continue,
                Err(e) => return Err(FsError::Other(e.to_string())),
            };
            if entry.depth() == 0 {
                continue;
            }
            paths.push(entry.into_path());
        }

        Ok(paths)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn remove_all(&self, path: &Path) -> FsResult<()> {
        let meta = match std::fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(FsError::at(path, e)),
        };

        let removed = if meta.is_dir() {
            std::fs::remove_dir_all(path)
        } else {
            std::fs::remove_file(path)
        };

        match removed {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FsError::at(path, e)),
        }
    }
}

fn is_not_found(err: &ignore::Error) -> bool {
    err.io_error()
        .map(|io| io.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}
