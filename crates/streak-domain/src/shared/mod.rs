use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDate;
use crate::check_in::StreakStats;

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Business Logic (3xxx)
    AlreadyCheckedIn = 3001,

    // Data & Persistence (4xxx)
    RepositoryError = 4001,

    // Validation (6xxx)
    ValidationError = 6001,
    InvalidDateFormat = 6002,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::AlreadyCheckedIn
            | ErrorCode::ValidationError
            | ErrorCode::InvalidDateFormat => ErrorSeverity::Info,

            ErrorCode::RepositoryError => ErrorSeverity::Critical,
        }
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCode::AlreadyCheckedIn)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Critical,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid date format: {0}. Use YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("Already checked in on {date}")]
    AlreadyCheckedIn {
        date: CalendarDate,
        stats: StreakStats,
        next_eligible_date: CalendarDate,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidDateFormat(_) => ErrorCode::InvalidDateFormat,
            DomainError::AlreadyCheckedIn { .. } => ErrorCode::AlreadyCheckedIn,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::Repository(_) => ErrorCode::RepositoryError,
        }
    }

    /// Get error message
    pub fn message(&self) -> String {
        match self {
            DomainError::InvalidDateFormat(value) => {
                format!("Invalid date format '{}'. Use YYYY-MM-DD", value)
            }
            DomainError::AlreadyCheckedIn { .. } => {
                "Already checked in today! Come back tomorrow to continue your streak.".to_string()
            }
            DomainError::Validation(msg) | DomainError::Repository(msg) => msg.clone(),
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
