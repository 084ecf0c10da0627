//! Clean Event Port
//!
//! Observable interface for cleanup runs. The `Obsolete` event is the
//! pre-deletion hook: sinks may inspect or log the list, but cannot veto it.

use std::path::PathBuf;

/// Event emitted during a cleanup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanEvent {
    /// Cleanup started for a destination
    Started {
        destination: PathBuf,
        dry_run: bool,
    },

    /// Obsolete paths computed, emitted once before any deletion
    Obsolete { paths: Vec<PathBuf> },

    /// One obsolete path was removed
    Deleted { path: PathBuf },

    /// One obsolete path could not be removed
    DeleteFailed { path: PathBuf, error: String },

    /// Cleanup finished
    Completed {
        obsolete_count: usize,
        deleted_count: usize,
        error_count: usize,
    },
}

impl CleanEvent {
    /// Hook name, e.g. `clean:on_obsolete`
    pub fn name(&self) -> &'static str {
        match self {
            CleanEvent::Started { .. } => "clean:start",
            CleanEvent::Obsolete { .. } => "clean:on_obsolete",
            CleanEvent::Deleted { .. } => "clean:deleted",
            CleanEvent::DeleteFailed { .. } => "clean:delete_failed",
            CleanEvent::Completed { .. } => "clean:complete",
        }
    }

    /// Whether this is a per-path event
    pub fn is_detail(&self) -> bool {
        matches!(self, CleanEvent::Deleted { .. } | CleanEvent::DeleteFailed { .. })
    }
}

/// Trait for receiving clean events
///
/// Implementations:
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `LogEventSink`: routes events into `tracing`
/// - `NoopEventSink`: silent operation
pub trait CleanEventSink {
    /// Handle a clean event
    fn on_event(&self, event: CleanEvent);

    /// Check if this sink wants per-path events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

impl<T: CleanEventSink + ?Sized> CleanEventSink for &T {
    fn on_event(&self, event: CleanEvent) {
        (**self).on_event(event)
    }

    fn wants_detailed_events(&self) -> bool {
        (**self).wants_detailed_events()
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl CleanEventSink for NoopEventSink {
    fn on_event(&self, _event: CleanEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
