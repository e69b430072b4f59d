//! Application setup and initialization

pub mod database;
pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use multiup_core::{provider, Config};
use multiup_db::PgMediaStore;

use crate::state::AppState;

/// Initialize the entire application: database, provider pool, routes.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Fail fast on misconfiguration.
    config.validate().context("Configuration validation failed")?;

    let pool = database::setup_database(&config).await?;
    let store = Arc::new(PgMediaStore::new(pool));

    let providers = provider::create_pool(&config);
    let state = Arc::new(AppState::new(config, providers, store));

    let router = routes::build_router(state.clone());
    Ok((state, router))
}
