//! # Blogicum API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::io;

use actix_web::{App, HttpServer, web};
use migration::{Migrator, MigratorTrait};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().map_err(io::Error::other)?;

    tracing::info!(
        "Starting Blogicum API Server on {}:{}",
        config.host,
        config.port
    );

    let db = blogicum_infra::connect(&config.database)
        .await
        .map_err(io::Error::other)?;

    if config.auto_migrate {
        Migrator::up(&db, None).await.map_err(io::Error::other)?;
        tracing::info!("Pending migrations applied");
    }

    let state = AppState::new(db);
    tracing::info!("Application state initialized");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
