#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use sitesweep::domain::services::join_segments;

fuzz_target!(|data: &[u8]| {
    if let Ok(request_path) = std::str::from_utf8(data) {
        let root = Path::new("/srv/public");
        let segments = sitesweep::normalize_segments(request_path);
        let joined = join_segments(root, &segments);
        assert!(joined.starts_with(root));
    }
});
