//! # Citizen Services
//!
//! REST backend for the municipal citizen-services app.
//!
//! This is the application entry point that initializes:
//! - `.env` variables
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Order store (Postgres or in-memory) and optional Redis
//! - HTTP server

use anyhow::Result;
use tracing::info;

use citizen_services::config::Settings;
use citizen_services::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // .env first: tracing reads RUST_LOG and LOG_FORMAT
    citizen_services::config::load_env_file();
    citizen_services::telemetry::init_tracing();

    info!("Starting Citizen Services API...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    info!("Server stopped");
    Ok(())
}
