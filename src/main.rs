//! EventHub
//!
//! Main application entry point

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use eventhub::{
    config::Settings,
    database::{create_pool, run_migrations, DatabaseService, EventStore},
    handlers::AppState,
    server,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", eventhub::info());

    // Initialize database connection
    info!("Connecting to database...");
    let pool = create_pool(&settings.database).await?;
    run_migrations(&pool).await?;

    let store: Arc<dyn EventStore> = Arc::new(DatabaseService::new(pool));
    let app = server::build_router(AppState::new(store));

    let listener = TcpListener::bind((settings.server.host.as_str(), settings.server.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", settings.server.host, settings.server.port))?;
    info!("Server is running on {}", listener.local_addr()?);

    server::serve(listener, app)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Server terminated unexpectedly"))?;

    info!("EventHub has been shut down.");
    Ok(())
}
