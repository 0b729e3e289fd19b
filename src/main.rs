//! Compensation Scenario Engine server.
//!
//! Loads configuration from `COMPENSATION_CONFIG_DIR` (default `./config`),
//! seeds the in-memory role salary catalog and serves the HTTP API.

use std::env;
use std::process::ExitCode;

use compensation_engine::api::{AppState, create_router};
use compensation_engine::config::{ConfigLoader, LogFormat, PORT_ENV};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG_DIR_ENV: &str = "COMPENSATION_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = "./config";

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config_dir = env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let port_override = env::var(PORT_ENV).ok();

    let config = match ConfigLoader::load(&config_dir)
        .and_then(|loader| loader.with_port_override(port_override.as_deref()))
    {
        Ok(config) => config,
        Err(err) => {
            // Tracing is configured from the file that failed to load.
            eprintln!("failed to load configuration from {}: {}", config_dir, err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.settings().log_format);

    let address = config.settings().bind_address();
    let router = create_router(AppState::in_memory(&config));

    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(address = %address, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(
        address = %address,
        role_salaries = config.role_salaries().len(),
        "Server running"
    );

    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
