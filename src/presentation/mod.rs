//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting for text mode
//!
//! Wiring use cases to infrastructure happens in the binary's command
//! handlers, which depend on this module for their argument types.

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands};
pub use output::{resolution_json, TextRenderer};
