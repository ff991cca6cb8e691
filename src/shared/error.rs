//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Validation error: {}", summarize(.0))]
    Validation(Vec<FieldError>),
}

/// Error code shared by every 500 response.
pub const INTERNAL_ERROR_CODE: u16 = 10000;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    /// Internal failure detail, only filled in development
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Field-level validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// `field: message` of the first error, used as the top-level message
fn summarize(errors: &[FieldError]) -> String {
    errors
        .first()
        .map(|e| format!("{}: {}", e.field, e.message))
        .unwrap_or_else(|| "Validation failed".into())
}

/// Response extension carrying the hidden cause of a 500.
///
/// The error-detail middleware decides whether it reaches the client.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

impl ErrorResponse {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            errors: None,
            detail: None,
        }
    }

    pub fn internal() -> Self {
        Self::new(INTERNAL_ERROR_CODE, "Internal server error")
    }
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal(_) | AppError::Database(_) | AppError::Redis(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut field_errors = None;
        let (code, message, detail) = match self {
            AppError::NotFound(msg) => (10001, msg, None),
            AppError::BadRequest(msg) => (10002, msg, None),
            AppError::Unauthorized(msg) => (10003, msg, None),
            AppError::Forbidden(msg) => (10004, msg, None),
            AppError::Conflict(msg) => (10005, msg, None),
            AppError::RateLimited => (10006, "Rate limited".into(), None),
            AppError::Validation(errors) => {
                let message = summarize(&errors);
                field_errors = Some(errors);
                (10007, message, None)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (INTERNAL_ERROR_CODE, "Internal server error".into(), Some(msg))
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (INTERNAL_ERROR_CODE, "Internal server error".into(), Some(e.to_string()))
            }
            AppError::Redis(e) => {
                tracing::error!("Redis error: {}", e);
                (INTERNAL_ERROR_CODE, "Internal server error".into(), Some(e.to_string()))
            }
        };

        let mut body = ErrorResponse::new(code, message);
        body.errors = field_errors;
        let mut response = (status, Json(body)).into_response();
        if let Some(detail) = detail {
            response.extensions_mut().insert(ErrorDetail(detail));
        }
        response
    }
}
