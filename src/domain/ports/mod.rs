//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clean_events;
pub mod file_system;
pub mod site;

pub use clean_events::{CleanEvent, CleanEventSink, NoopEventSink};
pub use file_system::{FileSystem, FsError, FsResult};
pub use site::Site;
