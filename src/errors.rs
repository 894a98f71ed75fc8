//! Error types for leadflow
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

use crate::schemas::Stage;

/// Result type alias for leadflow operations
pub type Result<T> = std::result::Result<T, LeadflowError>;

/// Main error type for all leadflow operations
#[derive(Debug, Error)]
pub enum LeadflowError {
    /// Malformed command input (empty customer name, negative budget, unknown reference)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Attempt to pull a lead from a resolved stage back into an early stage
    #[error("Transition forbidden: cannot move a lead from {from} back to {to}")]
    TransitionForbidden { from: Stage, to: Stage },

    /// Attempt to resolve a lead without a note and an attendant
    #[error("Evidence required: moving from {from} to {to} needs a note and an attendant")]
    EvidenceRequired { from: Stage, to: Stage },

    /// Lead id not present in the repository
    #[error("Lead not found: {0}")]
    NotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl LeadflowError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            LeadflowError::Validation(_) => "VALIDATION",
            LeadflowError::TransitionForbidden { .. } => "TRANSITION_FORBIDDEN",
            LeadflowError::EvidenceRequired { .. } => "EVIDENCE_REQUIRED",
            LeadflowError::NotFound(_) => "NOT_FOUND",
            LeadflowError::InvalidJson(_) => "INVALID_JSON",
            LeadflowError::FileNotFound(_) => "FILE_NOT_FOUND",
            LeadflowError::ConfigError(_) => "CONFIG_ERROR",
            LeadflowError::Io(_) => "IO_ERROR",
            LeadflowError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        LeadflowError::Validation(message.into())
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        LeadflowError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &LeadflowError) -> i32 {
    match error {
        LeadflowError::Validation(_) | LeadflowError::EvidenceRequired { .. } => 2,
        LeadflowError::TransitionForbidden { .. } => 3,
        LeadflowError::NotFound(_) => 4,
        _ => 1,
    }
}
