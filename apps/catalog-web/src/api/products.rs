//! Product routes

use axum::Router;
use domain_products::{handlers, ProductsApiController, ProductsController};

use crate::state::AppState;

pub const PAGES_PATH: &str = "/products";
pub const API_PATH: &str = "/api/products";

/// Page router mounted at [`PAGES_PATH`]
pub fn page_router(state: &AppState) -> Router {
    let controller = ProductsController::from_shared(state.store.clone());
    handlers::pages::router(controller, PAGES_PATH)
}

/// API router, reachable at [`API_PATH`] once nested
pub fn api_router(state: &AppState) -> Router {
    let controller = ProductsApiController::from_shared(state.store.clone());
    handlers::api::router(controller, API_PATH)
}
