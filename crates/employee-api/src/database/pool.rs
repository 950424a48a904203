//! Database connection pool

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

use crate::config::settings::DatabaseConfig;

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&config.connection_url())
        .await
}
