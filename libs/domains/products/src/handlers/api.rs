//! JSON API for products.

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{HeaderValue, StatusCode, header},
    response::Response,
    routing::get,
};
use axum_helpers::{AppError, ErrorResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use super::render;
use crate::controllers::ProductsApiController;
use crate::model_state::ModelState;
use crate::models::Product;
use crate::repository::Repository;

/// OpenAPI documentation for the products API
#[derive(OpenApi)]
#[openapi(
    paths(get_products, get_product, put_product, post_product, delete_product),
    components(schemas(Product, ErrorResponse)),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Router state: the controller plus the public path of the API, used for
/// `Location` headers.
pub struct ApiState<R> {
    controller: ProductsApiController<R>,
    location_base: Arc<str>,
}

impl<R> Clone for ApiState<R> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            location_base: Arc::clone(&self.location_base),
        }
    }
}

impl<R> ApiState<R> {
    fn product_location(&self, id: i32) -> String {
        format!("{}/{}", self.location_base, id)
    }

    fn collection_location(&self, _action: &str) -> String {
        self.location_base.to_string()
    }
}

/// Creates the products API router.
///
/// Routes are relative (`/` and `/{id}`); nest the router where
/// `location_base` says it is reachable, e.g. `/api/products`.
pub fn router<R>(controller: ProductsApiController<R>, location_base: &str) -> Router
where
    R: Repository<Product> + 'static,
{
    let state = ApiState {
        controller,
        location_base: Arc::from(location_base.trim_end_matches('/')),
    };

    Router::new()
        .route("/", get(get_products::<R>).post(post_product::<R>))
        .route(
            "/{id}",
            get(get_product::<R>)
                .put(put_product::<R>)
                .delete(delete_product::<R>),
        )
        .with_state(state)
}

/// List every product
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn get_products<R: Repository<Product> + 'static>(
    State(state): State<ApiState<R>>,
) -> Result<Response, AppError> {
    let result = state.controller.get_products().await?;
    Ok(render(result, &ModelState::new(), |a| state.collection_location(a)))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn get_product<R: Repository<Product> + 'static>(
    State(state): State<ApiState<R>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let result = state.controller.get_product(id).await?;
    Ok(render(result, &ModelState::new(), |a| state.collection_location(a)))
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = Product,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Route id does not match body id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn put_product<R: Repository<Product> + 'static>(
    State(state): State<ApiState<R>>,
    id: Result<Path<i32>, PathRejection>,
    product: Result<Json<Product>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let Json(product) = product?;
    let result = state.controller.put_product(id, product)?;
    Ok(render(result, &ModelState::new(), |a| state.collection_location(a)))
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = Product,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 409, description = "Id already in use", body = ErrorResponse)
    )
)]
async fn post_product<R: Repository<Product> + 'static>(
    State(state): State<ApiState<R>>,
    product: Result<Json<Product>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(product) = product?;
    let id = product.id;
    let result = state.controller.post_product(product).await?;
    let created = result.status_code() == StatusCode::CREATED;

    let mut response = render(result, &ModelState::new(), |a| state.collection_location(a));
    if created {
        if let Ok(value) = HeaderValue::from_str(&state.product_location(id)) {
            response.headers_mut().insert(header::LOCATION, value);
        }
    }
    Ok(response)
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn delete_product<R: Repository<Product> + 'static>(
    State(state): State<ApiState<R>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let result = state.controller.delete_product(id).await?;
    Ok(render(result, &ModelState::new(), |a| state.collection_location(a)))
}
