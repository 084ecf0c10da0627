//! In-memory site

use std::path::{Path, PathBuf};

use crate::domain::entities::OutputItem;
use crate::domain::ports::Site;
use crate::error::SweepResult;

/// A site whose outputs are registered up front
#[derive(Debug)]
pub struct StaticSite {
    destination: PathBuf,
    keep_files: Vec<String>,
    outputs: Vec<OutputItem>,
}

impl StaticSite {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            keep_files: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Set the protected fragments
    pub fn with_keep_files<I, S>(mut self, keep_files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep_files = keep_files.into_iter().map(Into::into).collect();
        self
    }

    /// Register one output
    pub fn with_output(mut self, item: impl Into<OutputItem>) -> Self {
        self.outputs.push(item.into());
        self
    }

    /// Register several outputs
    pub fn with_outputs<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OutputItem>,
    {
        self.outputs.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }
}

impl Site for StaticSite {
    fn destination(&self) -> &Path {
        &self.destination
    }

    fn keep_files(&self) -> &[String] {
        &self.keep_files
    }

    fn each_output_item(
        &self,
        visit: &mut dyn FnMut(&OutputItem) -> SweepResult<()>,
    ) -> SweepResult<()> {
        self.outputs.iter().try_for_each(visit)
    }
}
