//! Sitesweep - build output cleaner for static sites
//!
//! Before a site build writes its files, sitesweep removes everything in the
//! destination directory that the build will not produce again, while leaving
//! protected paths (`.git`, `CNAME`, ...) alone. It also resolves request
//! paths against the built output the way a static file server would.
//!
//! ## Layers
//!
//! - `domain` - pure types, services and the ports they depend on
//! - `application` - the clean use case wiring ports together
//! - `infrastructure` - filesystem, site sources and event sinks
//! - `config` - `sitesweep.toml` and environment overrides
//! - `presentation` - CLI definitions and text rendering

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CleanOptions, CleanReport, CleanUseCase};
pub use config::Config;
pub use domain::entities::OutputItem;
pub use domain::ports::{CleanEvent, CleanEventSink, FileSystem, Site};
pub use domain::services::{normalize_segments, resolve_request_path};
pub use error::{SweepError, SweepResult};
pub use infrastructure::{JsonEventSink, LocalFs, LogEventSink, ManifestSite, StaticSite};
