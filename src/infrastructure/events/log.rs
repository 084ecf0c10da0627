//! Log Event Sink
//!
//! Routes clean events into `tracing`, for human-facing runs where the
//! subscriber decides what reaches stderr.

use tracing::{debug, info, warn};

use crate::domain::ports::{CleanEvent, CleanEventSink};

#[derive(Debug, Clone, Copy, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl CleanEventSink for LogEventSink {
    fn on_event(&self, event: CleanEvent) {
        let hook = event.name();
        match event {
            CleanEvent::Started {
                destination,
                dry_run,
            } => {
                debug!(hook, destination = %destination.display(), dry_run, "cleanup started");
            }
            CleanEvent::Obsolete { paths } => {
                info!(hook, count = paths.len(), "obsolete paths found");
                for path in &paths {
                    debug!(hook, path = %path.display(), "obsolete");
                }
            }
            CleanEvent::Deleted { path } => {
                info!(hook, path = %path.display(), "deleted");
            }
            CleanEvent::DeleteFailed { path, error } => {
                warn!(hook, path = %path.display(), %error, "delete failed");
            }
            CleanEvent::Completed {
                obsolete_count,
                deleted_count,
                error_count,
            } => {
                info!(
                    hook,
                    obsolete = obsolete_count,
                    deleted = deleted_count,
                    errors = error_count,
                    "cleanup finished"
                );
            }
        }
    }
}
