//! Error handling for the PRIMO admin engine
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy. Where the legacy console
//! silently ignored invalid input, operations here return an explicit
//! `AdminError::Validation`.

use thiserror::Error;

/// Main error type for admin operations
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Module not found: {code}")]
    ModuleNotFound { code: String },

    #[error("Series not found: {series_id}")]
    SeriesNotFound { series_id: String },

    #[error("Question not found: {question_id}")]
    QuestionNotFound { question_id: String },

    #[error("Plan not found: {plan_id}")]
    PlanNotFound { plan_id: String },

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    #[error("Conversation not found: {conversation_id}")]
    ConversationNotFound { conversation_id: String },

    #[error("Media item not found: {media_id}")]
    MediaNotFound { media_id: String },

    #[error("No form is currently open: {0}")]
    NoOpenForm(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for admin operations
pub type Result<T> = std::result::Result<T, AdminError>;

impl AdminError {
    /// Check if the error is caused by operator input rather than the system
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AdminError::Validation(_)
                | AdminError::ModuleNotFound { .. }
                | AdminError::SeriesNotFound { .. }
                | AdminError::QuestionNotFound { .. }
                | AdminError::PlanNotFound { .. }
                | AdminError::UserNotFound { .. }
                | AdminError::ConversationNotFound { .. }
                | AdminError::MediaNotFound { .. }
                | AdminError::NoOpenForm(_)
        )
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AdminError::Validation(_) | AdminError::NoOpenForm(_) => ErrorSeverity::Info,
            AdminError::Authentication(_) => ErrorSeverity::Warning,
            AdminError::Config(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_classification() {
        assert_eq!(
            AdminError::Validation("title required".into()).severity(),
            ErrorSeverity::Info
        );
        assert_eq!(
            AdminError::Authentication("bad credentials".into()).severity(),
            ErrorSeverity::Warning
        );
        assert_eq!(
            AdminError::Config("missing sentinel".into()).severity(),
            ErrorSeverity::Critical
        );
    }

    #[test]
    fn test_user_error_classification() {
        assert!(AdminError::SeriesNotFound { series_id: "s9".into() }.is_user_error());
        assert!(!AdminError::Config("broken".into()).is_user_error());
    }
}
