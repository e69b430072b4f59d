//! Error types module
//!
//! All errors in the application are unified under the `AppError` enum.
//! Each variant self-describes its HTTP presentation through the
//! `ErrorMetadata` trait so the API layer can render responses and pick
//! log levels without matching on variants itself.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for client mistakes like unknown providers
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "UNKNOWN_PROVIDER")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Access denied: not allowed to {action}")]
    AccessDenied { action: String },

    #[error("Unknown provider: {name}")]
    UnknownProvider { name: String },

    /// One message per violated constraint, in field order.
    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::Unauthorized(_) => 401,
            AppError::AccessDenied { .. } => 403,
            AppError::UnknownProvider { .. } => 404,
            AppError::Validation(_) => 400,
            AppError::InvalidInput(_) => 400,
            AppError::PayloadTooLarge(_) => 413,
            AppError::NotFound(_) => 404,
            AppError::Database(_) => 500,
            AppError::Internal(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::AccessDenied { .. } => "ACCESS_DENIED",
            AppError::UnknownProvider { .. } => "UNKNOWN_PROVIDER",
            AppError::Validation(_) => "VALIDATION_FAILED",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        match self {
            // Internal details stay out of client responses.
            AppError::Database(_) => "Database error".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::Validation(_) | AppError::InvalidInput(_) | AppError::NotFound(_) => {
                LogLevel::Debug
            }
            AppError::Unauthorized(_)
            | AppError::AccessDenied { .. }
            | AppError::UnknownProvider { .. }
            | AppError::PayloadTooLarge(_) => LogLevel::Warn,
            AppError::Database(_) | AppError::Internal(_) => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_provider_is_client_error() {
        let err = AppError::UnknownProvider {
            name: "hologram".to_string(),
        };
        assert_eq!(err.http_status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_PROVIDER");
        assert!(err.client_message().contains("hologram"));
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::Database("connection refused on 10.0.0.3".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert!(!err.client_message().contains("10.0.0.3"));
    }

    #[test]
    fn test_validation_log_level() {
        let err = AppError::Validation(vec!["File is empty".to_string()]);
        assert_eq!(err.log_level(), LogLevel::Debug);
        assert_eq!(err.http_status_code(), 400);
    }
}
