//! Property tests for request path resolution.

use proptest::prelude::*;

use sitesweep::domain::services::join_segments;
use sitesweep::{normalize_segments, resolve_request_path};

fn request_path() -> impl Strategy<Value = String> {
    let segment = prop::sample::select(vec!["", ".", "..", "a", "b", "index.html", "c.html"]);
    prop::collection::vec(segment, 0..8).prop_map(|segments| format!("/{}", segments.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: normalization never panics on arbitrary input.
    #[test]
    fn property_normalize_never_panics(s in "(?s).{0,256}") {
        let _ = normalize_segments(&s);
    }

    /// PROPERTY: normalized segments are plain names.
    #[test]
    fn property_segments_are_plain(s in request_path()) {
        for segment in normalize_segments(&s) {
            prop_assert!(!segment.is_empty());
            prop_assert!(segment != "." && segment != "..");
        }
    }

    /// PROPERTY: normalizing an already-normalized path changes nothing.
    #[test]
    fn property_normalize_is_idempotent(s in request_path()) {
        let once = normalize_segments(&s);
        let twice = normalize_segments(&once.join("/"));
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: the resolved file always lies strictly under the public root.
    #[test]
    fn property_resolution_is_confined(s in request_path()) {
        let dir = tempfile::tempdir().unwrap();
        let segments = resolve_request_path(dir.path(), &s);

        prop_assert!(!segments.is_empty());
        let resolved = join_segments(dir.path(), &segments);
        prop_assert!(resolved.starts_with(dir.path()));
        prop_assert!(resolved != dir.path());
    }
}
