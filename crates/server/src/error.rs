//! Unified error handling.
//!
//! Provides a unified `AppError` type mapping each error kind to a fixed
//! status code and body shape. All route handlers should return
//! `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// One failed check in a request payload.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    /// Human-readable description of the failure.
    pub msg: String,
    /// Line in the request body where deserialization stopped.
    pub line: usize,
    /// Column in the request body where deserialization stopped.
    pub column: usize,
}

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A name the catalog refuses to serve.
    #[error("Oops! {0} did something. There goes a rainbow...")]
    ForbiddenName(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request body failed validation.
    #[error("Validation failed")]
    Validation {
        errors: Vec<ValidationIssue>,
        /// The raw offending request body, echoed back to the caller.
        body: String,
    },

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Structured 422 from a `serde_json` deserialization failure.
    #[must_use]
    pub fn validation(err: &serde_json::Error, body: String) -> Self {
        Self::Validation {
            errors: vec![ValidationIssue {
                msg: err.to_string(),
                line: err.line(),
                column: err.column(),
            }],
            body,
        }
    }
}

impl From<crate::store::StoreError> for AppError {
    fn from(err: crate::store::StoreError) -> Self {
        match err {
            crate::store::StoreError::UnknownId(id) => Self::NotFound(format!("item \"{id}\"")),
        }
    }
}

/// Body shape for validation failures: every failing check plus the raw
/// payload that caused them.
#[derive(Debug, Serialize)]
struct ValidationBody {
    detail: Vec<ValidationIssue>,
    body: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Internal(_)) {
            tracing::error!(error = %self, "Request error");
        }

        match self {
            Self::Validation { errors, body } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationBody {
                    detail: errors,
                    body,
                }),
            )
                .into_response(),
            Self::ForbiddenName(_) => {
                (StatusCode::IM_A_TEAPOT, self.to_string()).into_response()
            }
            Self::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
            // Don't expose internal error details to clients
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
                .into_response(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("item foo".to_string());
        assert_eq!(err.to_string(), "Not found: item foo");

        let err = AppError::ForbiddenName("yolo".to_string());
        assert_eq!(
            err.to_string(),
            "Oops! yolo did something. There goes a rainbow..."
        );
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::ForbiddenName("yolo".to_string())),
            StatusCode::IM_A_TEAPOT
        );
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Validation {
                errors: vec![],
                body: String::new()
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_from_serde_error() {
        let err = serde_json::from_str::<pantry_core::Item>(r#"{"name": "Foo"}"#).unwrap_err();
        let app_err = AppError::validation(&err, r#"{"name": "Foo"}"#.to_string());

        let AppError::Validation { errors, body } = &app_err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 1);
        assert!(errors[0].msg.contains("price"));
        assert_eq!(body, r#"{"name": "Foo"}"#);
    }
}
