//! tinywiki CLI entry point
//!
//! Parses arguments and hands off to the CLI module; errors go to stderr
//! with a non-zero exit status.

use tinywiki::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
