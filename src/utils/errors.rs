//! Error handling for SupportDesk
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for SupportDesk application
#[derive(Error, Debug)]
pub enum SupportDeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not authorized: {telegram_id}")]
    NotAuthorized { telegram_id: i64 },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Incorrect owner password")]
    IncorrectPassword,

    #[error("Owner is already initialized")]
    OwnerAlreadyInitialized,

    #[error("A role with this name already exists: {name}")]
    RoleNameDuplication { name: String },

    #[error("A support user already exists for this identity: {telegram_id}")]
    SupportUserAlreadyExists { telegram_id: i64 },

    #[error("Entity already exists: {0}")]
    EntityAlreadyExists(String),

    #[error("Role not found: {role_id}")]
    RoleNotFound { role_id: i64 },

    #[error("Regular user not found: {user_id}")]
    RegularUserNotFound { user_id: i64 },

    #[error("Support user not found: {user_id}")]
    SupportUserNotFound { user_id: i64 },

    #[error("Question not found: {question_id}")]
    QuestionNotFound { question_id: i64 },

    #[error("Answer not found: {answer_id}")]
    AnswerNotFound { answer_id: i64 },

    #[error("No question is currently bound")]
    NoBoundQuestion,

    #[error("No question has been asked yet")]
    NoLastQuestion,

    #[error("The bound question has no answer yet")]
    NoLastAnswer,

    #[error("Answer has already been estimated with this value")]
    AnswerAlreadyEstimated,

    #[error("Value is already assigned: {0}")]
    SameValueAssigning(String),

    #[error("Action is not allowed: {0}")]
    IncorrectAction(String),
}

/// Result type alias for SupportDesk operations
pub type Result<T> = std::result::Result<T, SupportDeskError>;

impl SupportDeskError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SupportDeskError::Io(_))
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SupportDeskError::Config(_) => ErrorSeverity::Critical,
            SupportDeskError::Io(_) => ErrorSeverity::Critical,
            SupportDeskError::NotAuthorized { .. } => ErrorSeverity::Warning,
            SupportDeskError::PermissionDenied(_) => ErrorSeverity::Warning,
            SupportDeskError::IncorrectPassword => ErrorSeverity::Warning,
            SupportDeskError::InvalidInput(_) => ErrorSeverity::Info,
            SupportDeskError::SameValueAssigning(_) => ErrorSeverity::Info,
            SupportDeskError::AnswerAlreadyEstimated => ErrorSeverity::Info,
            SupportDeskError::NoBoundQuestion => ErrorSeverity::Info,
            SupportDeskError::NoLastQuestion => ErrorSeverity::Info,
            SupportDeskError::NoLastAnswer => ErrorSeverity::Info,
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
