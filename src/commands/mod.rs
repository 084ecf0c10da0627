//! Command handlers for the sitesweep binary

pub mod clean;
pub mod resolve;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sitesweep::config::Config;
use sitesweep::presentation::TextRenderer;

/// Load config for a command run and surface unknown-key warnings.
///
/// Warnings go to stderr in text mode and to the log in JSON mode, so
/// stdout stays machine-readable.
pub(crate) fn load_config(
    explicit: Option<&Path>,
    json: bool,
    renderer: &TextRenderer,
) -> Result<(Config, PathBuf)> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let (config, warnings) = Config::discover(explicit, &cwd).context("failed to load config")?;

    if json {
        for warning in &warnings {
            tracing::warn!(%warning, "config");
        }
    } else {
        eprint!("{}", renderer.render_warnings(&warnings));
    }

    Ok((config, cwd))
}
