//! Products Domain
//!
//! Product catalog CRUD: the `Product` entity, a generic repository, page and
//! API controllers, and the Axum routers that host them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← Axum routes (pages + JSON API)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Controllers │  ← Per-action branching, returns ActionResult
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Generic trait + in-memory implementation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, ProductForm, ModelState
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_products::{
//!     handlers, InMemoryRepository, Product, ProductsApiController, ProductsController,
//! };
//!
//! let store: Arc<InMemoryRepository<Product>> = Arc::new(InMemoryRepository::new());
//!
//! let pages = handlers::pages::router(ProductsController::from_shared(store.clone()), "/products");
//! let api = handlers::api::router(ProductsApiController::from_shared(store), "/api/products");
//! ```

pub mod controllers;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod model_state;
pub mod models;
pub mod repository;
pub mod results;

pub use controllers::{ProductsApiController, ProductsController};
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryRepository;
pub use model_state::ModelState;
pub use models::{Product, ProductForm};
pub use repository::{Entity, Repository};
pub use results::ActionResult;
