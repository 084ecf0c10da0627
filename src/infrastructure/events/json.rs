//! JSON Event Sink
//!
//! Outputs clean events as NDJSON for CI/automation consumption.

use crate::domain::ports::{CleanEvent, CleanEventSink};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

impl CleanEventSink for JsonEventSink {
    fn on_event(&self, event: CleanEvent) {
        let name = event.name();
        let json = match event {
            CleanEvent::Started {
                destination,
                dry_run,
            } => {
                serde_json::json!({
                    "event": name,
                    "command": "clean",
                    "destination": display(&destination),
                    "dry_run": dry_run,
                })
            }

            CleanEvent::Obsolete { paths } => {
                serde_json::json!({
                    "event": name,
                    "command": "clean",
                    "count": paths.len(),
                    "paths": paths.iter().map(|p| display(p)).collect::<Vec<_>>(),
                })
            }

            CleanEvent::Deleted { path } => {
                serde_json::json!({
                    "event": name,
                    "command": "clean",
                    "path": display(&path),
                })
            }

            CleanEvent::DeleteFailed { path, error } => {
                serde_json::json!({
                    "event": name,
                    "command": "clean",
                    "path": display(&path),
                    "error": error,
                })
            }

            CleanEvent::Completed {
                obsolete_count,
                deleted_count,
                error_count,
            } => {
                let status = if error_count == 0 {
                    "success"
                } else {
                    "partial"
                };
                serde_json::json!({
                    "event": name,
                    "command": "clean",
                    "status": status,
                    "obsolete": obsolete_count,
                    "deleted": deleted_count,
                    "errors": error_count,
                })
            }
        };

        self.write_event(json);
    }
}
