//! Shared startup for the report binaries.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deploytally_core::{load_config, load_default_config, validate_config, Config, ReportError};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "DEPLOYTALLY_CONFIG";

/// Install the stderr logger. `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Resolve and validate configuration.
///
/// `DEPLOYTALLY_CONFIG` must point at an existing file when set; otherwise the
/// built-in defaults apply, layered with `deploytally.toml` if present and
/// `DEPLOYTALLY_*` environment overrides.
pub fn load_settings() -> Result<Config> {
    let config = match std::env::var(CONFIG_ENV).map(PathBuf::from) {
        Ok(path) => {
            info!("Loading configuration from {:?}", path);
            load_config(&path)
                .with_context(|| format!("Failed to load config from {:?}", path))?
        }
        Err(_) => load_default_config().context("Failed to load default configuration")?,
    };

    validate_config(&config).context("Configuration validation failed")?;
    Ok(config)
}

/// Run a report end to end and print it. Exits with status 1 on any failure,
/// before anything is written to stdout.
pub fn run_report<F>(name: &str, report: F)
where
    F: FnOnce(&Config) -> std::result::Result<String, ReportError>,
{
    init_logging();

    match execute(name, report) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("Fatal error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn execute<F>(name: &str, report: F) -> Result<String>
where
    F: FnOnce(&Config) -> std::result::Result<String, ReportError>,
{
    let config = load_settings()?;
    report(&config).with_context(|| format!("Failed to build {name}"))
}
