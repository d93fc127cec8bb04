//! Application setup and initialization
//!
//! All application initialization logic extracted from main.rs for better
//! organization and testability.

pub mod routes;
pub mod server;

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use cardgen_core::Config;
use cardgen_processing::CardComposer;

use crate::services::PhotoFetcher;
use crate::state::AppState;
use crate::store::PreviewStore;

/// Initialize the entire application: telemetry, shared services, routes.
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry()
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(
        environment = %config.environment,
        preview_ttl_secs = config.preview_ttl_secs,
        preview_sweep_interval_secs = config.preview_sweep_interval_secs,
        "Configuration loaded"
    );

    let previews = PreviewStore::new(Duration::from_secs(config.preview_ttl_secs));
    let sweeper = previews.spawn_sweeper(Duration::from_secs(config.preview_sweep_interval_secs));
    let photos = PhotoFetcher::new(Duration::from_secs(config.fetch_timeout_secs))?;
    let composer = CardComposer::new();

    let state = Arc::new(AppState {
        config: config.clone(),
        composer,
        previews,
        photos,
        sweeper,
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
