//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SweepResult;

use super::loader::{self, ConfigWarning};

/// Build output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Directory the build writes into
    #[serde(default = "default_destination")]
    pub destination: PathBuf,

    /// Fragments under the destination that cleanup must never delete
    #[serde(default = "default_keep_files")]
    pub keep_files: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            destination: default_destination(),
            keep_files: default_keep_files(),
        }
    }
}

fn default_destination() -> PathBuf {
    PathBuf::from("output")
}

fn default_keep_files() -> Vec<String> {
    vec![".git".to_string(), ".svn".to_string()]
}

/// Static serving settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeConfig {
    /// Directory requests are resolved against (defaults to the destination)
    #[serde(default)]
    pub public_root: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub serve: ServeConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SweepResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SweepResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load an explicit config file, or `sitesweep.toml` in `cwd`, or defaults.
    ///
    /// Environment overrides are applied on top.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> SweepResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, cwd)
    }

    /// Directory requests are resolved against
    pub fn public_root(&self) -> &Path {
        self.serve
            .public_root
            .as_deref()
            .unwrap_or(self.site.destination.as_path())
    }

    /// Anchor relative paths at `base`.
    pub fn resolve_relative_to(mut self, base: &Path) -> Self {
        if self.site.destination.is_relative() {
            self.site.destination = base.join(&self.site.destination);
        }
        if let Some(public_root) = self.serve.public_root.as_mut() {
            if public_root.is_relative() {
                *public_root = base.join(&*public_root);
            }
        }
        self
    }
}
