//! Catalog web app - product pages and JSON API

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::Repository;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState::new(config);
    if state.config.seed_demo_data {
        info!(
            "Seeded store with {} demo products",
            state.store.get_all().await?.len()
        );
    }

    let app = api::app(&state)?;

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    let store = state.store.clone();
    create_production_app(app, &state.config.server, async move {
        match store.get_all().await {
            Ok(products) => info!("Shutting down with {} products in store", products.len()),
            Err(e) => tracing::warn!("Store unavailable during shutdown: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog web shutdown complete");
    Ok(())
}
