//! HTTP error response conversion
//!
//! Preferred handler pattern: return `Result<impl IntoResponse, HttpAppError>`.
//! Use `AppError` (or types that convert into it) for errors and let `?`
//! convert them so they render consistently (status, body, logging).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cardgen_core::{AppError, ErrorMetadata, LogLevel};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    /// Whether this error is recoverable (can be retried)
    pub recoverable: bool,
}

/// Wrapper type for AppError to implement IntoResponse. Necessary because of
/// Rust's orphan rules - we can't implement IntoResponse (external trait) for
/// AppError (external type from cardgen-core).
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        })
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let err = self.0;

        match err.log_level() {
            LogLevel::Debug => tracing::debug!(error = %err, "Request failed"),
            LogLevel::Warn => tracing::warn!(error = %err, "Request failed"),
            LogLevel::Error => tracing::error!(error = %err, "Request failed"),
        }

        let status = StatusCode::from_u16(err.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            error: err.client_message(),
            code: err.error_code().to_string(),
            recoverable: err.is_recoverable(),
        };

        (status, Json(body)).into_response()
    }
}
