//! CLI command implementations
//!
//! Boot sequence, strict order:
//! 1. Configuration load
//! 2. Dataset load and validation
//! 3. Store and index construction
//! 4. Boundary activation (stdin protocol or HTTP)
//!
//! Any failure before step 4 is fatal: the process must not serve
//! from a dataset it could not fully load and verify.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::dataset::{load_dataset, Dataset};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::protocol::ProtocolHandler;
use crate::rest_api::{RestServer, ServerConfig};
use crate::service::QueryService;
use crate::store::EntityStore;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_lines, write_error, write_line, write_response};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the dataset file (required)
    pub dataset_path: String,

    /// HTTP server settings (optional, all defaulted)
    #[serde(default)]
    pub http: ServerConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.dataset_path.trim().is_empty() {
            return Err(CliError::config_error("dataset_path must not be empty"));
        }
        Ok(())
    }

    /// Get dataset path as Path
    pub fn dataset_path(&self) -> &Path {
        Path::new(&self.dataset_path)
    }
}

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
        Command::Check { config } => check(&config),
        Command::Start { config } => start(&config),
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Create the configured dataset file as an empty skeleton
///
/// Writes a dataset with all six collections empty. Refuses to touch
/// an existing dataset file.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let dataset_path = config.dataset_path();

    if dataset_path.exists() {
        return Err(CliError::already_initialized(dataset_path.display()));
    }

    if let Some(parent) = dataset_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                CliError::io_error(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let skeleton = serde_json::to_string_pretty(&Dataset::default())?;
    fs::write(dataset_path, skeleton)
        .map_err(|e| CliError::io_error(format!("Failed to write dataset skeleton: {}", e)))?;

    write_response(json!({
        "initialized": true,
        "dataset_path": dataset_path.display().to_string(),
    }))?;

    Ok(())
}

/// Load and validate the dataset, print the integrity report
pub fn check(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let (_dataset, report) = load_dataset(config.dataset_path())?;

    write_response(serde_json::to_value(&report)?)?;

    Ok(())
}

/// Boot and enter the stdin serving loop
pub fn start(config_path: &Path) -> CliResult<()> {
    let (service, _config) = boot(config_path)?;
    let handler = ProtocolHandler::new(service);

    log_event(Event::Serving);

    for line in read_lines() {
        match line {
            Ok(line) => {
                let response = handler.handle(&line);
                write_line(&response.to_json())?;
            }
            Err(e) => {
                // I/O failure on stdin ends the serving loop
                write_error(e.code_str(), e.message())?;
                break;
            }
        }
    }

    log_event(Event::ShutdownComplete);

    Ok(())
}

/// Boot and serve the HTTP API
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let (service, config) = boot(config_path)?;

    let mut http_config = config.http.clone();
    if let Some(port) = port {
        http_config.port = port;
    }

    let server = RestServer::new(service, http_config);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    runtime.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Boot the system: config, dataset, store, index
///
/// Returns the ready query service and the loaded configuration.
fn boot(config_path: &Path) -> CliResult<(QueryService, Config)> {
    log_event(Event::BootStart);

    let config = Config::load(config_path).map_err(|e| {
        log_event_with_fields(Event::BootFailed, &[("reason", e.message())]);
        e
    })?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("dataset_path", &config.dataset_path)],
    );

    let (dataset, report) = load_dataset(config.dataset_path()).map_err(|e| {
        log_event_with_fields(Event::BootFailed, &[("reason", e.message())]);
        CliError::from(e)
    })?;

    for warning in &report.warnings {
        log_event_with_fields(Event::IntegrityWarning, &[("detail", warning)]);
    }

    log_event_with_fields(
        Event::DatasetLoaded,
        &[
            ("countries", &report.summary.countries.to_string()),
            ("athletes", &report.summary.athletes.to_string()),
            ("teams", &report.summary.teams.to_string()),
            ("disciplines", &report.summary.disciplines.to_string()),
            ("events", &report.summary.events.to_string()),
            ("medals", &report.summary.medals.to_string()),
        ],
    );

    let service = QueryService::new(EntityStore::new(dataset));

    Ok((service, config))
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config(temp_dir: &TempDir, dataset_name: &str) -> PathBuf {
        let config_path = temp_dir.path().join("podium.json");
        let dataset_path = temp_dir.path().join(dataset_name);

        let config = json!({
            "dataset_path": dataset_path.to_string_lossy()
        });

        fs::write(&config_path, config.to_string()).unwrap();
        config_path
    }

    fn write_dataset(path: &Path, value: serde_json::Value) {
        fs::write(path, value.to_string()).unwrap();
    }

    #[test]
    fn test_init_writes_empty_skeleton() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir, "olympics.json");

        init(&config_path).unwrap();

        let dataset_path = temp_dir.path().join("olympics.json");
        let (dataset, report) = load_dataset(&dataset_path).unwrap();
        assert!(dataset.medals.is_empty());
        assert_eq!(report.summary.countries, 0);
    }

    #[test]
    fn test_init_refuses_existing_dataset() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir, "olympics.json");

        init(&config_path).unwrap();
        let result = init(&config_path);

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().code(),
            &CliErrorCode::AlreadyInitialized
        );
    }

    #[test]
    fn test_check_reports_integrity_failure() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir, "olympics.json");
        write_dataset(
            &temp_dir.path().join("olympics.json"),
            json!({
                "countries": [], "athletes": [], "teams": [],
                "disciplines": [], "events": [],
                "medals": [
                    {"id": 1, "event_id": 1, "type": "gold", "date": "2021-01-01"}
                ]
            }),
        );

        let result = check(&config_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().message().contains("PODIUM_DATA_INTEGRITY"));
    }

    #[test]
    fn test_config_requires_dataset_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("podium.json");
        fs::write(&config_path, json!({"dataset_path": "  "}).to_string()).unwrap();

        let result = Config::load(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_http_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir, "olympics.json");

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.http.port, 8000);
        assert_eq!(config.http.host, "127.0.0.1");
    }

    #[test]
    fn test_missing_config_is_config_error() {
        let result = Config::load(Path::new("/nonexistent/podium.json"));
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().code(),
            &CliErrorCode::ConfigError
        );
    }
}
