//! Axum surfaces over the controllers.
//!
//! - [`pages`]: form-driven flow, views rendered as a JSON envelope
//! - [`api`]: JSON API with OpenAPI documentation

pub mod api;
pub mod pages;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_helpers::{ErrorCode, errors::error_response};
use serde::Serialize;

use crate::model_state::ModelState;
use crate::results::ActionResult;

pub use api::ApiDoc;

/// Body of a rendered view.
#[derive(Debug, Serialize)]
pub struct ViewEnvelope<'a, M> {
    pub view: &'static str,
    pub model: M,
    pub errors: &'a ModelState,
}

/// Turns an action result into an HTTP response.
///
/// `locate` maps an action name to the path a redirect should point at.
pub(crate) fn render<M, F>(result: ActionResult<M>, model_state: &ModelState, locate: F) -> Response
where
    M: Serialize,
    F: FnOnce(&str) -> String,
{
    match result {
        ActionResult::View { view, model } => Json(ViewEnvelope {
            view,
            model,
            errors: model_state,
        })
        .into_response(),
        ActionResult::RedirectToAction { action } => {
            (StatusCode::SEE_OTHER, [(header::LOCATION, locate(action))]).into_response()
        }
        ActionResult::Status { code, payload } => status_response(code, payload),
    }
}

fn status_response<M: Serialize>(code: StatusCode, payload: Option<M>) -> Response {
    match payload {
        Some(payload) => (code, Json(payload)).into_response(),
        None if code == StatusCode::NOT_FOUND => error_response(
            code,
            "The requested product was not found".to_string(),
            ErrorCode::NotFound,
        ),
        None if code == StatusCode::BAD_REQUEST => error_response(
            code,
            "Route id does not match the product id".to_string(),
            ErrorCode::BadRequest,
        ),
        None => code.into_response(),
    }
}
