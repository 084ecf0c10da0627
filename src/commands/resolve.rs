//! Resolve command handler

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use sitesweep::domain::services::{join_segments, resolve_request_path};
use sitesweep::presentation::{resolution_json, TextRenderer};

use super::load_config;

/// Execute the resolve command
pub fn cmd_resolve(
    public_root: Option<PathBuf>,
    config: Option<PathBuf>,
    request_path: &str,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let renderer = TextRenderer::from_env(verbose);
    let (config, cwd) = load_config(config.as_deref(), json, &renderer)?;

    let public_root = public_root
        .map(|dir| cwd.join(dir))
        .unwrap_or_else(|| config.public_root().to_path_buf());

    let segments = resolve_request_path(&public_root, request_path);
    let resolved = join_segments(&public_root, &segments);
    let exists = resolved.is_file();
    debug!(
        public_root = %public_root.display(),
        request_path,
        resolved = %resolved.display(),
        exists,
        "resolved request path"
    );

    if json {
        println!("{}", resolution_json(request_path, &segments, &resolved, exists));
    } else {
        print!("{}", renderer.render_resolution(&segments, &resolved, exists));
    }
    Ok(())
}
