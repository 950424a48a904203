use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use employee_api::config::Settings;
use employee_api::database::{pool, PgEmployeeStore};
use employee_api::metrics::Metrics;
use employee_api::router::build_router;
use employee_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,employee_api=debug".to_string()),
        )
        .with_target(true)
        .json()
        .init();

    info!("Starting employee API server...");

    // Load configuration
    let settings = Settings::load()?;
    info!("Configuration loaded");

    // Connect to the database; startup is fatal if this fails
    let db_pool = pool::create_pool(&settings.database).await?;
    info!("Database connection established");

    let store = Arc::new(PgEmployeeStore::new(db_pool));
    let metrics = Arc::new(Metrics::new()?);
    let state = AppState::new(store, metrics);

    // Prime the employee gauge before serving any traffic
    state.refresh_employee_gauge().await;

    let app = build_router(state);

    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
