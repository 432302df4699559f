use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollbookError {
    /// A candidate record failed a business rule. `field` names the first
    /// offending field so the message is actionable as-is.
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    #[error("Student ID already exists: {0}")]
    DuplicateId(String),

    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Command(String),
}

impl RollbookError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        RollbookError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RollbookError>;
