//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`; the error is rendered as
//!
//! ```json
//! { "status": "error", "message": "Short code not found" }
//! ```
//!
//! with the status code chosen by the variant.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// JSON envelope shared by all error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Client input failed validation (missing field, malformed URL).
    #[error("{message}")]
    Validation { message: String },

    /// The requested short code does not exist.
    #[error("{message}")]
    NotFound { message: String },

    /// The request body could not be read as JSON.
    #[error("{message}")]
    UnsupportedMediaType { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::UnsupportedMediaType {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            status: "error",
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Surfaces the first field message produced by `validator`.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message)
    }
}

/// Maps body extraction failures.
///
/// A well-formed JSON document of the wrong shape is a client input error (400).
/// Anything that is not JSON at all, including a missing `Content-Type`, is 415.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                AppError::bad_request(format!("Invalid request body: {}", err.body_text()))
            }
            other => AppError::unsupported_media_type(format!(
                "Unsupported Media Type: {}",
                other.body_text()
            )),
        }
    }
}
