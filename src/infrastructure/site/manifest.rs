//! Manifest-driven site
//!
//! Lets the cleaner run without a build pipeline in-process: the build
//! writes a manifest listing the files it produced, one per line.
//!
//! ```text
//! # generated by the build
//! index.html
//! about/index.html
//! /abs/path/to/output/feed.xml
//! ```
//!
//! Relative entries are relative to the destination. Blank lines and lines
//! starting with `#` are ignored.

use std::path::{Path, PathBuf};

use crate::domain::entities::OutputItem;
use crate::domain::ports::Site;
use crate::error::SweepResult;

use super::StaticSite;

/// Parse manifest text into output items
pub fn parse_manifest(content: &str) -> Vec<OutputItem> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| OutputItem::direct(line.trim_start_matches("./")))
        .collect()
}

/// A site whose outputs come from a manifest file
#[derive(Debug)]
pub struct ManifestSite {
    inner: StaticSite,
}

impl ManifestSite {
    /// Read `manifest` and build a site writing into `destination`.
    ///
    /// Without a manifest the site declares no outputs, so every
    /// unprotected path in the destination is obsolete.
    pub fn load(
        destination: impl Into<PathBuf>,
        manifest: Option<&Path>,
        keep_files: Vec<String>,
    ) -> SweepResult<Self> {
        let items = match manifest {
            Some(path) => parse_manifest(&std::fs::read_to_string(path)?),
            None => Vec::new(),
        };
        Ok(Self {
            inner: StaticSite::new(destination)
                .with_keep_files(keep_files)
                .with_outputs(items),
        })
    }

    pub fn output_count(&self) -> usize {
        self.inner.output_count()
    }
}

impl Site for ManifestSite {
    fn destination(&self) -> &Path {
        self.inner.destination()
    }

    fn keep_files(&self) -> &[String] {
        self.inner.keep_files()
    }

    fn each_output_item(
        &self,
        visit: &mut dyn FnMut(&OutputItem) -> SweepResult<()>,
    ) -> SweepResult<()> {
        self.inner.each_output_item(visit)
    }
}
