//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (Local)
//! - `events/` - Event sinks (JSON, tracing)
//! - `site/` - Site implementations (in-memory, manifest)

pub mod events;
pub mod fs;
pub mod site;

// Re-export for convenience
pub use events::{JsonEventSink, LogEventSink};
pub use fs::LocalFs;
pub use site::{ManifestSite, StaticSite};
