use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use std::sync::PoisonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product {0} not found")]
    NotFound(i32),

    #[error("Product with id {0} already exists")]
    DuplicateId(i32),

    #[error("Store error: {0}")]
    Store(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::DuplicateId(id) => {
                AppError::Conflict(format!("Product with id {} already exists", id))
            }
            ProductError::Store(msg) => AppError::Store(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl<T> From<PoisonError<T>> for ProductError {
    fn from(err: PoisonError<T>) -> Self {
        ProductError::Store(err.to_string())
    }
}
