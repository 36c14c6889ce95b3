//! Error handling middleware - `{"error": true, "msg": ...}` responses.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode};
use pgo_core::DomainError;
use pgo_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to JSON error responses.
///
/// Every payload is a message that is safe to send to the caller.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) | AppError::Internal(msg) => msg,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.message()))
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Internal { message, source } => {
                // The cause stays in the logs only
                tracing::error!(error = %source, "{}", message);
                AppError::Internal(message.to_string())
            }
        }
    }
}

/// Rejects request bodies that do not deserialize into the handler's type.
pub fn json_error_handler(
    err: error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected request body");
    AppError::BadRequest("Bad request, check your body json".to_string()).into()
}

/// Rejects query strings that do not deserialize into the handler's type.
pub fn query_error_handler(
    err: error::QueryPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected query string");
    AppError::BadRequest("Bad request, check your query params".to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
