//! # ChatDev API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[cfg(feature = "postgres")]
use chatdev_infra::DatabaseConnections;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting ChatDev API Server on {}:{}",
        config.host,
        config.port
    );

    #[cfg(feature = "postgres")]
    let (state, db) = match &config.database {
        Some(db_config) => {
            let db = DatabaseConnections::init(db_config)
                .await
                .context("Failed to connect to database")?;
            (AppState::postgres(&db), Some(db))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            (AppState::in_memory(), None)
        }
    };

    #[cfg(not(feature = "postgres"))]
    let state = {
        if config.database.is_some() {
            tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
        }
        AppState::in_memory()
    };

    tracing::info!(store = state.store.as_str(), "Application state initialized");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    #[cfg(feature = "postgres")]
    if let Some(db) = db {
        db.close().await.context("Failed to close database")?;
    }

    tracing::info!("Server stopped");
    Ok(())
}
