//! # Server Configuration
//!
//! This module contains the server setup and configuration for the HRMS API.

use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::handlers;
use crate::handlers::crud;
use crate::models;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .merge(crud::routes::<models::employee::Entity>())
        .merge(crud::routes::<models::client::Entity>())
        .merge(crud::routes::<models::asset::Entity>())
        .merge(crud::routes::<models::department::Entity>())
        .merge(crud::routes::<models::designation::Entity>())
        .merge(crud::routes::<models::user::Entity>())
        .merge(crud::routes::<models::user_role::Entity>())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the server with the given configuration
pub async fn run_server(
    config: AppConfig,
    db: DatabaseConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState { db };
    let app = create_app(state);

    // Resolve the configured bind address
    let addr = config
        .bind_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Server listening on: {}", addr);
    println!("Running in profile: {}", config.profile);

    axum::serve(listener, app).await?;

    Ok(())
}
