//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (`--json`, `--verbose`) are inherited by all subcommands, so
//! they may appear before or after the subcommand name.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sitesweep - removes obsolete files from a static-site build output
#[derive(Parser, Debug)]
#[command(name = "sitesweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Delete everything in the destination the next build won't produce
    Clean {
        /// Build output directory (overrides config)
        #[arg(short, long)]
        destination: Option<PathBuf>,

        /// File listing the build's outputs, one path per line
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Additional path to protect, relative to the destination (repeatable)
        #[arg(short, long = "keep", value_name = "PATH")]
        keep: Vec<String>,

        /// Dry run - show what would be deleted
        #[arg(long)]
        dry_run: bool,

        /// Config file (defaults to ./sitesweep.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show which file under the public root would answer a request path
    Resolve {
        /// Directory requests are served from (overrides config)
        #[arg(short, long)]
        public_root: Option<PathBuf>,

        /// Config file (defaults to ./sitesweep.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Request path, e.g. /blog/post
        request_path: String,
    },
}
