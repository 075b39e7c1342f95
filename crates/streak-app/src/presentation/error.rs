use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use streak_domain::shared::{DomainError, ErrorCode, ErrorSeverity};

/// Structured error body for HTTP responses
///
/// This provides rich error information to clients, including:
/// - Error code for programmatic handling
/// - Human-readable message
/// - Severity level for UI presentation
/// - Recoverability flag for retry logic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
    /// Numeric error code (3xxx-6xxx range)
    pub code: u16,

    /// Human-readable error message
    pub message: String,

    /// Error severity level
    pub severity: ErrorSeverity,

    /// Whether the operation can be retried
    pub recoverable: bool,
}

impl CommandError {
    /// Create an error from an error code and message
    pub fn from_code(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: error_code.code(),
            message: message.into(),
            severity: error_code.severity(),
            recoverable: error_code.is_recoverable(),
        }
    }

    /// Request body could not be read as `{ "date": "YYYY-MM-DD" }`
    pub fn invalid_date_format() -> Self {
        Self::from_code(
            ErrorCode::InvalidDateFormat,
            "Invalid date format. Use YYYY-MM-DD",
        )
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::ValidationError, message)
    }

    /// HTTP status for this error: client mistakes are 400, everything else 500
    pub fn status_code(&self) -> StatusCode {
        match self.code {
            3000..=3999 | 6000..=6999 => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for CommandError {
    fn from(err: DomainError) -> Self {
        Self {
            code: err.code().code(),
            message: err.message(),
            severity: err.severity(),
            recoverable: err.is_recoverable(),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for CommandError {}

impl IntoResponse for CommandError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
