//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>`; `AppError` values convert
//! into it with `?` and render consistently (status from the error's
//! metadata, JSON body, log line at the error's own level).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use multiup_core::{AppError, ErrorMetadata, LogLevel};
use serde::Serialize;

/// JSON body for non-upload errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Machine-readable error code for programmatic handling
    pub code: String,
}

/// Wrapper type for AppError to implement IntoResponse.
/// Needed because of orphan rules: IntoResponse is axum's trait and
/// AppError lives in multiup-core.
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

fn log_error(error: &AppError) {
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => tracing::debug!(error = %error, code, "Request failed"),
        LogLevel::Warn => tracing::warn!(error = %error, code, "Request failed"),
        LogLevel::Error => tracing::error!(error = %error, code, "Request failed"),
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        log_error(app_error);

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(ErrorResponse {
            error: app_error.client_message(),
            code: app_error.error_code().to_string(),
        });

        (status, body).into_response()
    }
}
