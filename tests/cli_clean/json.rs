use crate::helpers::*;

fn event_names(result: &TestResult) -> Vec<String> {
    result
        .json_lines()
        .iter()
        .map(|line| line["event"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn clean_json_streams_hook_events() {
    let env = built_site_env();

    let result = env.run(&["--json", "clean", "--manifest", "manifest.txt"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        event_names(&result),
        vec![
            "clean:start",
            "clean:on_obsolete",
            "clean:deleted",
            "clean:deleted",
            "clean:complete",
        ]
    );

    let lines = result.json_lines();
    assert_eq!(lines[1]["count"], 3);
    let deleted = lines[2]["path"].as_str().unwrap_or_default();
    assert!(deleted.ends_with("img"), "unexpected first deletion {deleted}");
    assert!(lines[3]["path"].as_str().unwrap_or_default().ends_with("old.html"));
    assert_eq!(lines[4]["obsolete"], 3);
    assert_eq!(lines[4]["deleted"], 2);
    assert!(lines.iter().all(|line| line["command"] == "clean"));
}

#[test]
fn clean_json_dry_run_skips_delete_events() {
    let env = built_site_env();

    let result = env.run(&["clean", "--manifest", "manifest.txt", "--dry-run", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        event_names(&result),
        vec!["clean:start", "clean:on_obsolete", "clean:complete"]
    );
    assert!(env.exists("output/old.html"));
}

#[test]
fn clean_json_keeps_warnings_off_stdout() {
    let env = built_site_env();
    env.write("sitesweep.toml", "[site]\ndestnation = \"output\"\n");

    let result = env.run(&["--json", "clean", "--manifest", "manifest.txt", "--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!result.stdout.contains("unknown key"));
    assert!(result.stderr.contains("unknown key 'destnation'"), "{}", result.stderr);
}

#[test]
fn clean_json_failure_before_deletion_streams_nothing() {
    let env = built_site_env();
    env.write("bad-manifest.txt", "index.html\n../outside.html\n");

    let result = env.run(&["--json", "clean", "--manifest", "bad-manifest.txt"]);

    assert!(!result.success);
    assert!(result.json_lines().is_empty(), "{}", result.stdout);
    assert!(env.exists("output/old.html"));
}
