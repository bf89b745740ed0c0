//! Page routes for the product flow.
//!
//! Forms are `application/x-www-form-urlencoded`. Views come back as
//! `{ "view", "model", "errors" }` and redirects as `303 See Other`.

use axum::{
    Form, Router,
    extract::{
        Path, State,
        rejection::{FormRejection, PathRejection},
    },
    response::Response,
    routing::get,
};
use axum_helpers::AppError;
use std::sync::Arc;

use super::render;
use crate::controllers::{ProductsController, action};
use crate::model_state::ModelState;
use crate::models::{Product, ProductForm};
use crate::repository::Repository;

/// Router state: the controller plus the path the pages are mounted at.
pub struct PageState<R> {
    controller: ProductsController<R>,
    base_path: Arc<str>,
}

impl<R> Clone for PageState<R> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            base_path: Arc::clone(&self.base_path),
        }
    }
}

impl<R> PageState<R> {
    /// `Index` lives at the mount point, every other action below it.
    fn location(&self, action_name: &str) -> String {
        if action_name == action::INDEX {
            self.base_path.to_string()
        } else {
            format!("{}/{}", self.base_path, action_name.to_lowercase())
        }
    }
}

/// Page router mounted at `base_path` (for example `/products`).
pub fn router<R>(controller: ProductsController<R>, base_path: &str) -> Router
where
    R: Repository<Product> + 'static,
{
    let state = PageState {
        controller,
        base_path: Arc::from(base_path),
    };

    let routes = Router::new()
        .route("/", get(index::<R>))
        .route("/details", get(details_missing::<R>))
        .route("/details/{id}", get(details::<R>))
        .route("/create", get(create::<R>).post(create_post::<R>))
        .route("/edit", get(edit_missing::<R>))
        .route("/edit/{id}", get(edit::<R>).post(edit_post::<R>))
        .route("/delete/{id}", get(delete::<R>).post(delete_confirmed::<R>))
        .with_state(state);

    Router::new().nest(base_path, routes)
}

async fn index<R: Repository<Product> + 'static>(
    State(state): State<PageState<R>>,
) -> Result<Response, AppError> {
    let result = state.controller.index().await?;
    Ok(render(result, &ModelState::new(), |a| state.location(a)))
}

async fn details_missing<R: Repository<Product> + 'static>(
    State(state): State<PageState<R>>,
) -> Result<Response, AppError> {
    let result = state.controller.details(None).await?;
    Ok(render(result, &ModelState::new(), |a| state.location(a)))
}

async fn details<R: Repository<Product> + 'static>(
    State(state): State<PageState<R>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let result = state.controller.details(Some(id)).await?;
    Ok(render(result, &ModelState::new(), |a| state.location(a)))
}

async fn create<R: Repository<Product> + 'static>(
    State(state): State<PageState<R>>,
) -> Result<Response, AppError> {
    let result = state.controller.create();
    Ok(render(result, &ModelState::new(), |a| state.location(a)))
}

async fn create_post<R: Repository<Product> + 'static>(
    State(state): State<PageState<R>>,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;
    let (product, model_state) = form.bind();
    let result = state.controller.create_post(product, &model_state).await?;
    Ok(render(result, &model_state, |a| state.location(a)))
}

async fn edit_missing<R: Repository<Product> + 'static>(
    State(state): State<PageState<R>>,
) -> Result<Response, AppError> {
    let result = state.controller.edit(None).await?;
    Ok(render(result, &ModelState::new(), |a| state.location(a)))
}

async fn edit<R: Repository<Product> + 'static>(
    State(state): State<PageState<R>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let result = state.controller.edit(Some(id)).await?;
    Ok(render(result, &ModelState::new(), |a| state.location(a)))
}

async fn edit_post<R: Repository<Product> + 'static>(
    State(state): State<PageState<R>>,
    id: Result<Path<i32>, PathRejection>,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let Form(form) = form?;
    let (product, model_state) = form.bind();
    let result = state.controller.edit_post(id, product, &model_state)?;
    Ok(render(result, &model_state, |a| state.location(a)))
}

async fn delete<R: Repository<Product> + 'static>(
    State(state): State<PageState<R>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let result = state.controller.delete(Some(id)).await?;
    Ok(render(result, &ModelState::new(), |a| state.location(a)))
}

async fn delete_confirmed<R: Repository<Product> + 'static>(
    State(state): State<PageState<R>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let result = state.controller.delete_confirmed(id).await?;
    Ok(render(result, &ModelState::new(), |a| state.location(a)))
}
