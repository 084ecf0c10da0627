//! Clean command handler
//!
//! Deletes everything in the destination the build listed in the manifest
//! won't produce.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use sitesweep::application::{CleanOptions, CleanReport, CleanUseCase};
use sitesweep::domain::ports::{CleanEventSink, Site};
use sitesweep::error::SweepResult;
use sitesweep::infrastructure::{JsonEventSink, LocalFs, LogEventSink, ManifestSite};
use sitesweep::presentation::TextRenderer;

use super::load_config;

/// Flags of `sitesweep clean`
#[derive(Debug, Default)]
pub struct CleanArgs {
    pub destination: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
    pub keep: Vec<String>,
    pub dry_run: bool,
    pub config: Option<PathBuf>,
}

/// Execute the clean command
pub fn cmd_clean(args: CleanArgs, json: bool, verbose: u8) -> Result<()> {
    let renderer = TextRenderer::from_env(verbose);
    let (config, cwd) = load_config(args.config.as_deref(), json, &renderer)?;

    let destination = args
        .destination
        .map(|dir| cwd.join(dir))
        .unwrap_or(config.site.destination);
    let manifest = args.manifest.map(|file| cwd.join(file));

    let mut keep_files = config.site.keep_files;
    keep_files.extend(args.keep);

    if manifest.is_none() {
        warn!(
            destination = %destination.display(),
            "no manifest given; every unprotected path in the destination is obsolete"
        );
    }

    let site = ManifestSite::load(&destination, manifest.as_deref(), keep_files)
        .with_context(|| match &manifest {
            Some(path) => format!("failed to read manifest {}", path.display()),
            None => "failed to prepare site".to_string(),
        })?;
    debug!(outputs = site.output_count(), "loaded site outputs");
    let options = CleanOptions::new().with_dry_run(args.dry_run);

    if json {
        run(&site, options, JsonEventSink::stdout()).context("cleanup failed")?;
        return Ok(());
    }

    let report = run(&site, options, LogEventSink::new()).context("cleanup failed")?;
    print!("{}", renderer.render_clean(&report, site.destination()));
    Ok(())
}

fn run<ES: CleanEventSink>(
    site: &ManifestSite,
    options: CleanOptions,
    events: ES,
) -> SweepResult<CleanReport> {
    CleanUseCase::new(LocalFs::new(), events)
        .with_options(options)
        .cleanup(site)
}
