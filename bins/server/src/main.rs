//! Equipment loan tracker server.
//!
//! Main entry point: loads configuration, opens the database and serves the
//! loan pages and report downloads.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use peminjaman_api::{AppState, create_router};
use peminjaman_db::{connect, ensure_schema};
use peminjaman_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "peminjaman=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to database
    let engine = config.database.engine();
    let db = connect(&config.database)
        .await
        .with_context(|| format!("Failed to connect to {engine} database"))?;
    ensure_schema(&db)
        .await
        .context("Failed to create loan table")?;
    info!(%engine, "Connected to database, loan table ready");

    // Create application state and router
    let state = AppState::new(db).context("Failed to compile templates")?;
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
