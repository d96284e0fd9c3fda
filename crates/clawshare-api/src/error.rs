//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use clawshare_core::error::{AppError, ErrorKind};

/// Message returned for every internal failure.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub error: String,
    /// Machine-readable error code.
    pub code: String,
}

/// HTTP status and stable error code for an error kind.
pub fn status_and_code(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::PasswordRequired => (StatusCode::UNAUTHORIZED, "PASSWORD_REQUIRED"),
        ErrorKind::InvalidPassword => (StatusCode::UNAUTHORIZED, "INVALID_PASSWORD"),
        ErrorKind::Expired => (StatusCode::GONE, "SHARE_EXPIRED"),
        ErrorKind::Internal
        | ErrorKind::Storage
        | ErrorKind::Configuration
        | ErrorKind::Serialization => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

/// Message safe to show a caller; internal details are logged instead.
pub fn public_message(err: &AppError) -> String {
    if err.kind.is_internal() {
        tracing::error!(
            kind = %err.kind,
            error = %err.message,
            source = ?err.source,
            "Internal server error"
        );
        INTERNAL_MESSAGE.to_string()
    } else {
        err.message.clone()
    }
}

/// Handler error: a domain `AppError` on its way to becoming a response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = status_and_code(self.0.kind);

        let body = ApiErrorResponse {
            success: false,
            error: public_message(&self.0),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
