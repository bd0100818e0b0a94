//! WWII reference catalog backend.
//!
//! A REST API over a relational catalog of WWII countries, battles, figures,
//! and vehicles. The backend uses Axum as the web framework and SeaORM for
//! database operations, with a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, validation, relationship wiring
//! - **Data Layer** (`data/`) - Database operations via repositories
//! - **Model Layer** (`model/`) - Domain models and operation parameter types
//! - **DTO Layer** (`dto/`) - Request/response shapes
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! A typical request flows router → controller → service → repository → SQLite
//! and back, synchronously per request. Multi-step mutations run inside a
//! single database transaction.

mod config;
mod controller;
mod data;
mod dto;
mod error;
mod model;
mod router;
mod service;
mod startup;
mod state;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!(
        "Starting server on {}:{} (anonymous access: {}, all origins: {})",
        config.host,
        config.port,
        config.access.allow_anonymous,
        config.access.allow_all_origins
    );

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(startup::cors_layer(&config.access));

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
