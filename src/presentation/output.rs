//! Output Rendering
//!
//! Human-readable summaries for the text mode of each command. JSON mode
//! streams events instead, see `infrastructure::events`.

use std::fmt::Write as _;
use std::path::Path;

use crate::application::CleanReport;
use crate::domain::value_objects::ConfigWarning;

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    trash: &'static str,
    arrow: &'static str,
    warn: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            trash: "🗑",
            arrow: "→",
            warn: "⚠",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            trash: "[DEL]",
            arrow: "->",
            warn: "[!]",
        }
    }
}

/// Text renderer for command results
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Whether to use unicode icons
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    /// Unicode unless the terminal declares itself dumb
    pub fn from_env(verbose: u8) -> Self {
        let unicode = std::env::var("TERM").map_or(true, |term| term != "dumb");
        Self { unicode, verbose }
    }

    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    /// Summarize a cleanup run.
    ///
    /// Paths are shown relative to `destination`; individual paths are
    /// listed on dry runs or when verbose.
    pub fn render_clean(&self, report: &CleanReport, destination: &Path) -> String {
        let icons = self.icons();
        let mut out = String::new();

        if report.is_clean() {
            let _ = writeln!(out, "{} Nothing to clean", icons.check);
            let _ = writeln!(out, "  Destination: {}", destination.display());
            return out;
        }

        let affected = report.affected();
        if report.dry_run {
            let _ = writeln!(out, "{} Dry run: {} obsolete paths", icons.check, affected.len());
        } else {
            let _ = writeln!(out, "{} Clean Complete", icons.check);
        }
        let _ = writeln!(out, "  Destination: {}", destination.display());

        if report.dry_run || self.verbose > 0 {
            let _ = writeln!(out);
            let label = if report.dry_run { "Would delete" } else { "Deleted" };
            let _ = writeln!(out, "  {} ({}):", label, affected.len());
            for path in affected {
                let shown = path.strip_prefix(destination).unwrap_or(path);
                let _ = writeln!(out, "    {} {}", icons.trash, shown.display());
            }
        } else {
            let _ = writeln!(out, "  Deleted {} paths", affected.len());
        }

        if !report.replaced.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "  Replaced by directories ({}):", report.replaced.len());
            for path in &report.replaced {
                let shown = path.strip_prefix(destination).unwrap_or(path);
                let _ = writeln!(out, "    {} {}", icons.arrow, shown.display());
            }
        }

        out
    }

    /// Resolved segments joined by `/`; verbose runs add the full path.
    pub fn render_resolution(&self, segments: &[String], resolved: &Path, exists: bool) -> String {
        let mut out = format!("{}\n", segments.join("/"));
        if self.verbose > 0 {
            let icons = self.icons();
            let marker = if exists { icons.check } else { icons.cross };
            let _ = writeln!(out, "  {} {} {}", icons.arrow, resolved.display(), marker);
        }
        out
    }

    /// One line per config warning.
    pub fn render_warnings(&self, warnings: &[ConfigWarning]) -> String {
        let icons = self.icons();
        warnings
            .iter()
            .map(|warning| format!("{} {}\n", icons.warn, warning))
            .collect()
    }
}

/// JSON document for a resolved request path
pub fn resolution_json(
    request_path: &str,
    segments: &[String],
    resolved: &Path,
    exists: bool,
) -> serde_json::Value {
    serde_json::json!({
        "command": "resolve",
        "request_path": request_path,
        "segments": segments,
        "path": resolved.display().to_string(),
        "exists": exists,
    })
}
