//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies beyond injected predicates.

pub mod obsolete_detector;
pub mod request_path;

pub use obsolete_detector::{detect, existing_files, ObsoleteDetection, OutputSet};
pub use request_path::{join_segments, normalize_segments, resolve_request_path};
