//! Controller actions for products.
//!
//! Controllers own no state beyond a shared handle to the repository. Each
//! action awaits the repository, inspects the result and returns exactly one
//! [`ActionResult`](crate::results::ActionResult).

pub mod products;
pub mod products_api;

pub use products::ProductsController;
pub use products_api::ProductsApiController;

/// Action and view names used in results.
pub mod action {
    pub const INDEX: &str = "Index";
    pub const DETAILS: &str = "Details";
    pub const CREATE: &str = "Create";
    pub const EDIT: &str = "Edit";
    pub const DELETE: &str = "Delete";
}
