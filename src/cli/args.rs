//! CLI argument definitions using clap
//!
//! Commands:
//! - tinywiki init --config <path>
//! - tinywiki serve --config <path> [--port N] [--data-dir P] [--template-dir P]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tinywiki - A minimal server-rendered wiki
#[derive(Parser, Debug)]
#[command(name = "tinywiki")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file and create the page directory
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./tinywiki.json")]
        config: PathBuf,
    },

    /// Serve the wiki over HTTP
    Serve {
        /// Path to configuration file (defaults apply if it does not exist)
        #[arg(long, default_value = "./tinywiki.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,

        /// Override the configured page directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Override the configured template directory
        #[arg(long)]
        template_dir: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
