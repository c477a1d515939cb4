//! CLI command implementations
//!
//! Configuration is layered: defaults, then the config file, then the
//! `PORT` and `ROLLCALL_DATA_FILE` environment variables, then flags.

use std::fs;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::{JsonFileStore, RecordStore};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_json;

const PORT_VAR: &str = "PORT";
const DATA_FILE_VAR: &str = "ROLLCALL_DATA_FILE";
const DEFAULT_LOG_FILTER: &str = "rollcall=info,tower_http=info";

/// Load server configuration from a JSON file
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
}

/// Apply environment overrides using the given lookup
pub fn apply_env<F>(config: &mut HttpServerConfig, lookup: F) -> CliResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup(PORT_VAR) {
        config.port = port.trim().parse().map_err(|_| {
            CliError::config_error(format!("Invalid {}: '{}'", PORT_VAR, port))
        })?;
    }
    if let Some(path) = lookup(DATA_FILE_VAR) {
        config.data_file = PathBuf::from(path);
    }
    Ok(())
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn data_file_or_default(data_file: Option<PathBuf>) -> CliResult<PathBuf> {
    if let Some(path) = data_file {
        return Ok(path);
    }
    let mut config = HttpServerConfig::default();
    apply_env(&mut config, process_env)?;
    Ok(config.data_file)
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            data_file,
        } => {
            let mut server_config = match config {
                Some(path) => load_config(&path)?,
                None => HttpServerConfig::default(),
            };
            apply_env(&mut server_config, process_env)?;
            if let Some(host) = host {
                server_config.host = host;
            }
            if let Some(port) = port {
                server_config.port = port;
            }
            if let Some(data_file) = data_file {
                server_config.data_file = data_file;
            }
            serve(server_config)
        }
        Command::Init { data_file, force } => init(&data_file_or_default(data_file)?, force),
        Command::List { data_file } => list(&data_file_or_default(data_file)?),
    }
}

/// Start the HTTP server and block until it stops
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    init_logging();

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Create the data file holding an empty collection
pub fn init(data_file: &Path, force: bool) -> CliResult<()> {
    JsonFileStore::new(data_file).init(force)?;
    write_json(&serde_json::json!({
        "initialized": true,
        "data_file": data_file.display().to_string(),
    }))
}

/// Print the stored collection
pub fn list(data_file: &Path) -> CliResult<()> {
    let students = JsonFileStore::new(data_file).read_all()?;
    write_json(&serde_json::to_value(students)?)
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
