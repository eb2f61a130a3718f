//! CLI module for tinywiki
//!
//! Provides command-line interface for:
//! - init: Write a default config and create the page directory
//! - serve: Load config and serve the wiki over HTTP

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
