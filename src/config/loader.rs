//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SweepError, SweepResult};

use super::types::Config;

pub use crate::domain::value_objects::ConfigWarning;

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "sitesweep.toml";

pub const ENV_DESTINATION: &str = "SITESWEEP_DESTINATION";
pub const ENV_KEEP_FILES: &str = "SITESWEEP_KEEP_FILES";
pub const ENV_PUBLIC_ROOT: &str = "SITESWEEP_PUBLIC_ROOT";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative paths in the file are anchored at the file's directory.
pub fn load_with_warnings(path: &Path) -> SweepResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let (config, warnings) = parse_with_warnings(path, &content)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok((config.resolve_relative_to(base), warnings))
}

/// Parse TOML content, collecting unknown keys as warnings.
pub fn parse_with_warnings(path: &Path, content: &str) -> SweepResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SweepError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit path, `sitesweep.toml` in `cwd`, or defaults
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> SweepResult<(Config, Vec<ConfigWarning>)> {
    let candidate: Option<PathBuf> = match explicit {
        Some(path) => Some(cwd.join(path)),
        None => {
            let default_path = cwd.join(CONFIG_FILE_NAME);
            default_path.exists().then_some(default_path)
        }
    };

    let (config, warnings) = match candidate {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default().resolve_relative_to(cwd), Vec::new()),
    };

    Ok((with_overrides_from(config, cwd, env_lookup), warnings))
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Apply overrides from any key lookup; relative paths are anchored at `cwd`.
pub(crate) fn with_overrides_from<F>(mut config: Config, cwd: &Path, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(destination) = lookup(ENV_DESTINATION).filter(|v| !v.trim().is_empty()) {
        config.site.destination = cwd.join(destination.trim());
    }

    // Comma-separated; an empty value clears the list
    if let Some(keep_files) = lookup(ENV_KEEP_FILES) {
        config.site.keep_files = keep_files
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Some(public_root) = lookup(ENV_PUBLIC_ROOT).filter(|v| !v.trim().is_empty()) {
        config.serve.public_root = Some(cwd.join(public_root.trim()));
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["site", "destination", "keep_files", "serve", "public_root"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
