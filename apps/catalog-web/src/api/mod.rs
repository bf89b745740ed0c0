//! Route assembly

pub mod products;

use axum::Router;
use axum_helpers::{create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// JSON API routes, nested under `/api` by [`create_router`].
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::api_router(state))
}

/// Full application router: pages, API, docs, health and middleware.
pub fn app(state: &AppState) -> std::io::Result<Router> {
    let router = create_router::<ApiDoc>(
        routes(state),
        products::page_router(state),
        &state.config.server,
    )?;
    Ok(router.merge(health_router(state.config.app.clone())))
}
