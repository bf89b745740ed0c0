//! Outcome of a controller action.

use axum::http::StatusCode;

/// What a controller action asks the hosting layer to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult<M> {
    /// Render the named view bound to `model`.
    View { view: &'static str, model: M },
    /// Navigate to another action instead of rendering.
    RedirectToAction { action: &'static str },
    /// Bare status, optionally carrying a payload.
    Status {
        code: StatusCode,
        payload: Option<M>,
    },
}

impl<M> ActionResult<M> {
    pub fn view(view: &'static str, model: M) -> Self {
        Self::View { view, model }
    }

    pub fn redirect_to_action(action: &'static str) -> Self {
        Self::RedirectToAction { action }
    }

    pub fn not_found() -> Self {
        Self::Status {
            code: StatusCode::NOT_FOUND,
            payload: None,
        }
    }

    pub fn bad_request() -> Self {
        Self::Status {
            code: StatusCode::BAD_REQUEST,
            payload: None,
        }
    }

    pub fn ok(payload: M) -> Self {
        Self::Status {
            code: StatusCode::OK,
            payload: Some(payload),
        }
    }

    pub fn created(payload: M) -> Self {
        Self::Status {
            code: StatusCode::CREATED,
            payload: Some(payload),
        }
    }

    pub fn no_content() -> Self {
        Self::Status {
            code: StatusCode::NO_CONTENT,
            payload: None,
        }
    }

    /// HTTP status the result maps to. Redirects are `303 See Other`.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::View { .. } => StatusCode::OK,
            Self::RedirectToAction { .. } => StatusCode::SEE_OTHER,
            Self::Status { code, .. } => *code,
        }
    }

    /// The rendered model or the status payload.
    pub fn model(&self) -> Option<&M> {
        match self {
            Self::View { model, .. } => Some(model),
            Self::Status { payload, .. } => payload.as_ref(),
            Self::RedirectToAction { .. } => None,
        }
    }

    pub fn into_model(self) -> Option<M> {
        match self {
            Self::View { model, .. } => Some(model),
            Self::Status { payload, .. } => payload,
            Self::RedirectToAction { .. } => None,
        }
    }

    pub fn view_name(&self) -> Option<&'static str> {
        match self {
            Self::View { view, .. } => Some(view),
            _ => None,
        }
    }

    pub fn action_name(&self) -> Option<&'static str> {
        match self {
            Self::RedirectToAction { action } => Some(action),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == StatusCode::NOT_FOUND
    }

    pub fn is_bad_request(&self) -> bool {
        self.status_code() == StatusCode::BAD_REQUEST
    }
}
