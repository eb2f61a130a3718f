//! CLI command implementations

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::WikiConfig;
use crate::http_server::WikiServer;
use crate::observability::{Event, Logger};
use crate::store::FileStore;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve {
            config,
            port,
            data_dir,
            template_dir,
        } => serve(&config, port, data_dir, template_dir),
    }
}

/// Write a default config file and create the page directory it names
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized(config_path));
    }

    let config = WikiConfig::default();
    fs::write(config_path, config.to_json_pretty()?).map_err(|e| {
        CliError::io_error(format!("Failed to write {}: {}", config_path.display(), e))
    })?;

    FileStore::open(&config.data_dir)
        .map_err(|e| CliError::io_error(e.to_string()))?;

    println!("Wrote {}", config_path.display());
    Ok(())
}

/// Load configuration, apply flag overrides and serve until the process ends
pub fn serve(
    config_path: &Path,
    port: Option<u16>,
    data_dir: Option<PathBuf>,
    template_dir: Option<PathBuf>,
) -> CliResult<()> {
    Logger::info(Event::BootStart, &[("config", &config_path.display().to_string())]);

    let config = resolve_config(config_path, port, data_dir, template_dir)?;
    Logger::info(Event::ConfigLoaded, &[("addr", &config.socket_addr())]);

    let server = WikiServer::from_config(config).map_err(|e| {
        Logger::fatal(Event::BootFailed, &[("error", &e.to_string())]);
        CliError::from(e)
    })?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Config file (or defaults) with command-line overrides applied
pub fn resolve_config(
    config_path: &Path,
    port: Option<u16>,
    data_dir: Option<PathBuf>,
    template_dir: Option<PathBuf>,
) -> CliResult<WikiConfig> {
    let mut config = WikiConfig::load_or_default(config_path)?;

    if let Some(port) = port {
        config.port = port;
    }
    if let Some(data_dir) = data_dir {
        config.data_dir = data_dir;
    }
    if let Some(template_dir) = template_dir {
        config.template_dir = template_dir;
    }

    config.validate()?;
    Ok(config)
}
