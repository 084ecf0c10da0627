use crate::helpers::*;

#[test]
fn clean_help_shows_options() {
    let env = TestEnv::new();
    let result = env.run(&["clean", "--help"]);

    assert!(result.success, "clean --help should succeed:\n{}", result.combined_output());
    for flag in ["--destination", "--manifest", "--keep", "--dry-run", "--config"] {
        assert!(result.stdout.contains(flag), "help should mention {flag}");
    }
}

#[test]
fn clean_removes_obsolete_paths() {
    let env = built_site_env();

    let result = env.run(&["clean", "--manifest", "manifest.txt"]);

    assert!(result.success, "clean should succeed:\n{}", result.combined_output());
    assert_eq!(listing(&env, "output"), vec![".git", ".git/HEAD", "index.html"]);
    assert!(result.stdout.contains("Clean Complete"));
    assert!(result.stdout.contains("Deleted 2 paths"));
}

#[test]
fn clean_is_idempotent() {
    let env = built_site_env();

    let first = env.run(&["clean", "--manifest", "manifest.txt"]);
    let second = env.run(&["clean", "--manifest", "manifest.txt"]);

    assert!(first.success && second.success, "{}", second.combined_output());
    assert!(second.stdout.contains("Nothing to clean"));
}

#[test]
fn clean_dry_run_lists_without_deleting() {
    let env = built_site_env();

    let result = env.run(&["clean", "--manifest", "manifest.txt", "--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Would delete (3):"));
    assert!(result.stdout.contains("old.html"));
    assert!(result.stdout.contains("img/logo.png"));
    assert!(env.exists("output/old.html"));
    assert!(env.exists("output/img/logo.png"));
}

#[test]
fn clean_keep_flag_adds_protected_paths() {
    let env = built_site_env();
    env.write("output/CNAME", "example.com");

    let result = env.run(&["clean", "--manifest", "manifest.txt", "--keep", "CNAME"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.exists("output/CNAME"));
    assert!(env.exists("output/.git/HEAD"));
    assert!(!env.exists("output/old.html"));
}

#[test]
fn clean_destination_flag_is_relative_to_cwd() {
    let env = TestEnv::new();
    env.touch_all(&["_site/index.html", "_site/stale.html"]);
    env.write("manifest.txt", "index.html\n");

    let result = env.run(&["clean", "-d", "_site", "-m", "manifest.txt"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(listing(&env, "_site"), vec!["index.html"]);
}

#[test]
fn clean_missing_destination_is_noop() {
    let env = TestEnv::new();
    env.write("manifest.txt", "index.html\n");

    let result = env.run(&["clean", "--manifest", "manifest.txt"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Nothing to clean"));
    assert!(!env.exists("output"));
}

#[test]
fn clean_replaces_file_where_directory_is_needed() {
    let env = TestEnv::new();
    env.touch_all(&["output/blog"]);
    env.write("manifest.txt", "blog/index.html\n");

    let result = env.run(&["clean", "--manifest", "manifest.txt", "-v"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!env.exists("output/blog"));
    assert!(result.stdout.contains("Replaced by directories (1):"));
}

#[test]
fn clean_without_manifest_warns_and_empties_destination() {
    let env = built_site_env();

    let result = env.run(&["clean"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("no manifest given"));
    assert_eq!(listing(&env, "output"), vec![".git", ".git/HEAD"]);
}

#[test]
fn clean_missing_manifest_fails() {
    let env = built_site_env();

    let result = env.run(&["clean", "--manifest", "nope.txt"]);

    assert!(!result.success);
    assert!(result.stderr.contains("failed to read manifest"), "{}", result.stderr);
    assert!(env.exists("output/old.html"));
}

#[test]
fn clean_escaping_manifest_entry_deletes_nothing() {
    let env = built_site_env();
    env.write("manifest.txt", "index.html\n../outside.html\n");

    let result = env.run(&["clean", "--manifest", "manifest.txt"]);

    assert!(!result.success);
    assert!(result.stderr.contains("cannot be resolved"), "{}", result.stderr);
    assert!(env.exists("output/old.html"));
}
