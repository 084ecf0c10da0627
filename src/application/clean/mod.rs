//! Clean Use Case
//!
//! Removes everything from a build destination that the upcoming build
//! will not produce.
//!
//! This module handles:
//! - Listing the destination, minus protected paths
//! - Resolving the build's outputs and the directories they imply
//! - Firing the pre-deletion hook
//! - Deleting obsolete paths and reporting failures

mod options;
mod result;
mod use_case;

pub use options::CleanOptions;
pub use result::CleanReport;
pub use use_case::CleanUseCase;
