#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use sitesweep::infrastructure::site::parse_manifest;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let root = Path::new("/srv/site");
        for item in parse_manifest(content) {
            // Entries may be rejected, but never resolve outside the root
            if let Ok(path) = item.resolve(root) {
                assert!(path.starts_with(root) && path != root);
            }
        }
    }
});
