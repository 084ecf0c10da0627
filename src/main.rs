//! Sitesweep CLI - build output cleaner for static sites
//!
//! Usage: sitesweep <COMMAND>
//!
//! Commands:
//!   clean    Delete everything in the destination the next build won't produce
//!   resolve  Show which file under the public root answers a request path

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use sitesweep::presentation::{Cli, Commands};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Clean {
            destination,
            manifest,
            keep,
            dry_run,
            config,
        } => commands::clean::cmd_clean(
            commands::clean::CleanArgs {
                destination,
                manifest,
                keep,
                dry_run,
                config,
            },
            cli.json,
            cli.verbose,
        ),
        Commands::Resolve {
            public_root,
            config,
            request_path,
        } => commands::resolve::cmd_resolve(
            public_root,
            config,
            &request_path,
            cli.json,
            cli.verbose,
        ),
    }
}

/// Send logs to stderr; `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sitesweep={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}
