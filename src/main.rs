//! # HRMS API Main Entry Point
//!
//! This is the main entry point for the HRMS API service.

use hrms::{config::ConfigLoader, db::init_pool, server::run_server, telemetry::init_tracing};
use migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from layered env files and variables
    let config_loader = ConfigLoader::new();
    let config = config_loader.load()?;

    init_tracing(&config)?;

    // Log the loaded configuration with credentials masked
    tracing::info!("Loaded configuration for profile: {}", config.profile);
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::info!("Configuration: {}", redacted_json);
    }

    let db = init_pool(&config).await?;

    // Bring the schema up to date; existing tables and their data are left alone.
    Migrator::up(&db, None).await?;

    run_server(config, db).await
}
