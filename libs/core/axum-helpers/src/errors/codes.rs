//! Error codes carried by every error body.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.code(), 1004);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Client errors sit in 1000-1999, store errors in 2000-2999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Path segment did not parse (e.g. a non-numeric product id)
    InvalidPathParameter,
    /// JSON body could not be extracted
    JsonExtraction,
    NotFound,
    /// Duplicate product id
    Conflict,
    /// Route and body disagree, or the request is otherwise unusable
    BadRequest,
    /// Form body could not be extracted
    FormExtraction,
    /// The product store failed
    StoreError,
}

impl ErrorCode {
    const fn parts(self) -> (&'static str, i32, &'static str) {
        match self {
            Self::InvalidPathParameter => ("INVALID_PATH_PARAMETER", 1002, "Invalid path parameter"),
            Self::JsonExtraction => ("JSON_EXTRACTION", 1003, "Failed to parse request body"),
            Self::NotFound => ("NOT_FOUND", 1004, "Resource not found"),
            Self::Conflict => ("CONFLICT", 1008, "Resource already exists"),
            Self::BadRequest => ("BAD_REQUEST", 1010, "The request could not be understood"),
            Self::FormExtraction => ("FORM_EXTRACTION", 1012, "Failed to parse form body"),
            Self::StoreError => (
                "STORE_ERROR",
                2001,
                "The product store failed to complete the operation",
            ),
        }
    }

    /// Identifier clients match on.
    pub const fn as_str(self) -> &'static str {
        self.parts().0
    }

    /// Integer code used in structured logs.
    pub const fn code(self) -> i32 {
        self.parts().1
    }

    pub const fn default_message(self) -> &'static str {
        self.parts().2
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
