//! Event Sink Implementations
//!
//! Concrete implementations of CleanEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - LogEventSink: `tracing` output for interactive runs

mod json;
mod log;

pub use json::JsonEventSink;
pub use log::LogEventSink;
