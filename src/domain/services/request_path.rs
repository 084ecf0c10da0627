//! Request path resolution for serving built output
//!
//! Maps a request path such as `/blog/../about` onto the file under the
//! public root that should answer it. Parent segments only ever pop segments
//! the request itself contributed, so the result never leaves the public
//! root no matter how many `..` segments are supplied.

use std::path::{Component, Path, PathBuf};

const INDEX_FILE: &str = "index.html";
const HTML_EXTENSION: &str = ".html";

/// Split a request path into clean segments.
///
/// Empty and `.` segments are dropped; `..` pops the last retained segment
/// and is a no-op once nothing is left.
pub fn normalize_segments(request_path: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();

    for segment in request_path.split(|c| c == '/' || std::path::is_separator(c)) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other if is_plain_segment(other) => segments.push(other.to_string()),
            _ => {}
        }
    }

    segments
}

/// Segments carrying a drive prefix (`C:` on Windows) would replace the
/// public root when joined, so they are discarded.
fn is_plain_segment(segment: &str) -> bool {
    Path::new(segment)
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
}

/// Resolve `request_path` to the segments of the file that should serve it.
///
/// Checked in order: the exact file, then `index.html` inside it, then the
/// last segment with `.html` appended. A request with no segments resolves
/// to the root `index.html`; a last segment that already ends in `.html`
/// is not extended again.
pub fn resolve_request_path(public_root: &Path, request_path: &str) -> Vec<String> {
    let mut segments = normalize_segments(request_path);

    if segments.is_empty() {
        return vec![INDEX_FILE.to_string()];
    }

    if join_segments(public_root, &segments).is_file() {
        return segments;
    }

    if join_segments(public_root, &segments).join(INDEX_FILE).is_file() {
        segments.push(INDEX_FILE.to_string());
        return segments;
    }

    if let Some(last) = segments.last_mut() {
        if !last.ends_with(HTML_EXTENSION) {
            last.push_str(HTML_EXTENSION);
        }
    }
    segments
}

/// Join resolved segments back onto `public_root`.
pub fn join_segments<S: AsRef<str>>(public_root: &Path, segments: &[S]) -> PathBuf {
    segments
        .iter()
        .fold(public_root.to_path_buf(), |path, segment| path.join(segment.as_ref()))
}
