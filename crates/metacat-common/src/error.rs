//! Error types for metacat

use thiserror::Error;

/// Result type alias for metacat operations
pub type Result<T> = std::result::Result<T, MetacatError>;

/// Main error type shared by the workspace binaries
#[derive(Error, Debug)]
pub enum MetacatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// A single record failed one of its field contracts.
///
/// Every variant carries the name of the offending field so callers can
/// report it without parsing the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field <{field}>")]
    MissingField { field: &'static str },

    #[error("invalid value for field '{field}': '{token}'. Allowed: {allowed}")]
    UnknownToken {
        field: &'static str,
        token: String,
        allowed: String,
    },

    #[error("invalid file_type: '{value}'. Allowed: {allowed}")]
    InvalidFileType { value: String, allowed: String },

    #[error("{field} is not a non-negative integer: '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("{field} is not a valid YYYY-MM-DD date: '{value}'")]
    InvalidDate { field: &'static str, value: String },
}

impl ValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::UnknownToken { field, .. }
            | ValidationError::InvalidInteger { field, .. }
            | ValidationError::InvalidDate { field, .. } => *field,
            ValidationError::InvalidFileType { .. } => "file_type",
        }
    }
}
