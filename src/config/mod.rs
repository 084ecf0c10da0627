//! Configuration module for sitesweep
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SITESWEEP_*)
//! 3. Config file (`--config`, else `./sitesweep.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    parse_with_warnings, CONFIG_FILE_NAME, ENV_DESTINATION, ENV_KEEP_FILES, ENV_PUBLIC_ROOT,
};
pub use types::{Config, ServeConfig, SiteConfig};
