//! Database pool setup and migrations.

use std::time::Duration;

use anyhow::{Context, Result};
use multiup_core::Config;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

const MAX_CONNECTIONS: u32 = 10;
const CONNECT_TIMEOUT_SECS: u64 = 30;

pub async fn setup_database(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    multiup_db::MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database connected and migrated");
    Ok(pool)
}
