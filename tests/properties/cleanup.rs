//! Property tests for cleanup against a real temp directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use sitesweep::domain::ports::{FileSystem, NoopEventSink};
use sitesweep::domain::value_objects::{ancestors_below, ProtectedPaths};
use sitesweep::{CleanUseCase, LocalFs, StaticSite};

fn relative_path() -> impl Strategy<Value = String> {
    let segment = prop::sample::select(vec!["a", "b", "c", ".d", "e.html"]);
    prop::collection::vec(segment, 1..=3).prop_map(|segments| segments.join("/"))
}

/// Write each path as a file; paths whose parent is already a file are skipped.
fn build_tree(root: &Path, files: &[String]) {
    std::fs::create_dir_all(root).unwrap();
    for file in files {
        let path = root.join(file);
        if path.exists() {
            continue;
        }
        let Some(parent) = path.parent() else { continue };
        if std::fs::create_dir_all(parent).is_ok() {
            let _ = std::fs::write(&path, "content");
        }
    }
}

fn listing(root: &Path) -> Vec<PathBuf> {
    LocalFs.list_tree(root, true).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after cleanup only outputs, their ancestors and protected
    /// paths remain, and everything protected that existed is still there.
    #[test]
    fn property_post_state_is_outputs_plus_protected(
        existing in prop::collection::vec(relative_path(), 0..10),
        outputs in prop::collection::vec(relative_path(), 0..6),
        keep in prop::collection::vec(relative_path(), 0..3),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("site");
        build_tree(&root, &existing);

        let protected = ProtectedPaths::new(&root, &keep);
        let protected_before: Vec<PathBuf> = listing(&root)
            .into_iter()
            .filter(|path| protected.matches(path))
            .collect();

        let output_files: HashSet<PathBuf> = outputs.iter().map(|o| root.join(o)).collect();
        let output_dirs: HashSet<PathBuf> = output_files
            .iter()
            .flat_map(|file| ancestors_below(file, &root))
            .collect();

        let site = StaticSite::new(&root)
            .with_keep_files(keep.clone())
            .with_outputs(outputs.iter().map(String::as_str));
        CleanUseCase::new(LocalFs::new(), NoopEventSink).cleanup(&site).unwrap();

        for path in listing(&root) {
            prop_assert!(
                output_files.contains(&path) || output_dirs.contains(&path) || protected.shields(&path),
                "unexpected survivor {}",
                path.display()
            );
        }
        for path in protected_before {
            prop_assert!(path.exists(), "protected path deleted: {}", path.display());
        }
    }

    /// PROPERTY: a second cleanup with the same outputs finds nothing.
    #[test]
    fn property_cleanup_is_idempotent(
        existing in prop::collection::vec(relative_path(), 0..10),
        outputs in prop::collection::vec(relative_path(), 0..6),
        keep in prop::collection::vec(relative_path(), 0..3),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("site");
        build_tree(&root, &existing);

        let site = StaticSite::new(&root)
            .with_keep_files(keep)
            .with_outputs(outputs.iter().map(String::as_str));
        let use_case = CleanUseCase::new(LocalFs::new(), NoopEventSink);

        use_case.cleanup(&site).unwrap();
        let second = use_case.cleanup(&site).unwrap();

        prop_assert!(second.is_clean(), "second run found {:?}", second.obsolete);
    }
}
