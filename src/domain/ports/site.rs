//! Site port - what the cleaner needs to know about a build
//!
//! The build pipeline owns the decision of what gets generated; the cleaner
//! only asks where it goes and which paths must survive.

use std::path::Path;

use crate::domain::entities::OutputItem;
use crate::error::SweepResult;

pub trait Site {
    /// Directory the build writes into
    fn destination(&self) -> &Path;

    /// Fragments, relative to the destination, that must never be deleted
    fn keep_files(&self) -> &[String];

    /// Visit every item the build is about to write.
    ///
    /// An error from `visit` aborts the iteration and is returned as-is.
    fn each_output_item(
        &self,
        visit: &mut dyn FnMut(&OutputItem) -> SweepResult<()>,
    ) -> SweepResult<()>;
}

impl<T: Site + ?Sized> Site for &T {
    fn destination(&self) -> &Path {
        (**self).destination()
    }

    fn keep_files(&self) -> &[String] {
        (**self).keep_files()
    }

    fn each_output_item(
        &self,
        visit: &mut dyn FnMut(&OutputItem) -> SweepResult<()>,
    ) -> SweepResult<()> {
        (**self).each_output_item(visit)
    }
}
