//! Clean Use Case
//!
//! Orchestrates one cleanup pass over a build destination.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::ports::{CleanEvent, CleanEventSink, FileSystem, Site};
use crate::domain::services::{detect, existing_files, ObsoleteDetection, OutputSet};
use crate::domain::value_objects::{normalize_lexically, ProtectedPaths};
use crate::error::{DeletionFailure, SweepError, SweepResult};

use super::options::CleanOptions;
use super::result::CleanReport;

/// Clean use case - removes destination paths the next build won't produce
pub struct CleanUseCase<FS, ES>
where
    FS: FileSystem,
    ES: CleanEventSink,
{
    fs: FS,
    events: ES,
    options: CleanOptions,
}

impl<FS, ES> CleanUseCase<FS, ES>
where
    FS: FileSystem,
    ES: CleanEventSink,
{
    /// Create a new clean use case
    pub fn new(fs: FS, events: ES) -> Self {
        Self {
            fs,
            events,
            options: CleanOptions::default(),
        }
    }

    /// Replace the run options
    pub fn with_options(mut self, options: CleanOptions) -> Self {
        self.options = options;
        self
    }

    /// Compute the obsolete paths without firing hooks or deleting anything.
    pub fn obsolete_files<S: Site + ?Sized>(&self, site: &S) -> SweepResult<Vec<PathBuf>> {
        Ok(self.detect(site)?.obsolete)
    }

    /// Delete every obsolete path under the site's destination.
    ///
    /// Nothing is deleted, and no event is sent, if listing the destination
    /// or resolving any output fails. Once deletion starts every obsolete
    /// path is attempted, except the contents of a directory already removed;
    /// failures are collected and returned together as `SweepError::Deletion`.
    pub fn cleanup<S: Site + ?Sized>(&self, site: &S) -> SweepResult<CleanReport> {
        let dry_run = self.options.dry_run;
        let detection = self.detect(site)?;

        self.emit(CleanEvent::Started {
            destination: site.destination().to_path_buf(),
            dry_run,
        });
        self.emit(CleanEvent::Obsolete {
            paths: detection.obsolete.clone(),
        });

        let mut report = CleanReport::new(dry_run);
        report.replaced = detection.replaced;
        report.obsolete = detection.obsolete;

        if dry_run {
            self.emit(CleanEvent::Completed {
                obsolete_count: report.obsolete.len(),
                deleted_count: 0,
                error_count: 0,
            });
            return Ok(report);
        }

        let mut failures = Vec::new();
        // Obsolete paths are sorted, so a removed directory's contents follow it.
        let mut removed_dir: Option<&Path> = None;

        for path in &report.obsolete {
            if removed_dir.is_some_and(|dir| path.starts_with(dir)) {
                continue;
            }
            match self.fs.remove_all(path) {
                Ok(()) => {
                    self.emit(CleanEvent::Deleted { path: path.clone() });
                    report.deleted.push(path.clone());
                    removed_dir = Some(path.as_path());
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to delete obsolete path");
                    self.emit(CleanEvent::DeleteFailed {
                        path: path.clone(),
                        error: e.to_string(),
                    });
                    failures.push(DeletionFailure {
                        path: path.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        self.emit(CleanEvent::Completed {
            obsolete_count: report.obsolete.len(),
            deleted_count: report.deleted.len(),
            error_count: failures.len(),
        });

        if failures.is_empty() {
            Ok(report)
        } else {
            Err(SweepError::Deletion {
                failures,
                deleted: report.deleted.len(),
            })
        }
    }

    /// Per-path events only reach sinks that ask for them
    fn emit(&self, event: CleanEvent) {
        if event.is_detail() && !self.events.wants_detailed_events() {
            return;
        }
        self.events.on_event(event);
    }

    fn detect<S: Site + ?Sized>(&self, site: &S) -> SweepResult<ObsoleteDetection> {
        let root = normalize_lexically(&std::path::absolute(site.destination())?);
        let protected = ProtectedPaths::new(&root, site.keep_files());

        let listing = self
            .fs
            .list_tree(&root, true)
            .map_err(|source| SweepError::Listing {
                root: root.clone(),
                source,
            })?;
        let existing = existing_files(listing, &protected);

        let mut files = Vec::new();
        site.each_output_item(&mut |item| {
            files.push(item.resolve(&root)?);
            Ok(())
        })?;
        let outputs = OutputSet::new(&root, files);

        let detection = detect(&existing, &outputs, &protected, |path| self.fs.is_file(path));

        debug!(
            root = %root.display(),
            protected = protected.len(),
            existing = existing.len(),
            output_files = outputs.files().len(),
            output_dirs = outputs.directories().len(),
            replaced = detection.replaced.len(),
            obsolete = detection.obsolete.len(),
            "computed obsolete paths"
        );

        Ok(detection)
    }
}
