mod config;
mod db;
mod error;
mod handlers;
mod models;
mod seed;

use anyhow::{Context, Result};
use config::Config;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub struct AppState {
    pub db_pool: SqlitePool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gym_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;

    // Set up database
    tracing::info!("Connecting to database: {}", config.database_url);
    let db_pool = db::create_pool(&config.database_url, config.max_connections).await
        .context("Failed to create database pool")?;

    // Run migrations
    tracing::info!("Running database migrations");
    db::run_migrations(&db_pool).await
        .context("Failed to run migrations")?;

    if config.seed_demo_data {
        tracing::info!("Loading demo data");
        seed::load_demo_data(&db_pool).await
            .context("Failed to load demo data")?;
    }

    // Create shared application state
    let state = Arc::new(AppState { db_pool });

    let app = handlers::router(state);

    // Start server
    let addr = config.server_address();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
