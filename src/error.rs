//! Error types for the promode CLI and its file-backed inputs.
//!
//! The prompt engine itself is infallible; only config loading, concept
//! loading and command dispatch produce these errors.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for promode operations.
#[derive(Error, Debug)]
pub enum PromodeError {
    /// User provided invalid arguments or an unreadable/invalid input file.
    #[error("{0}")]
    UserError(String),

    /// The validator reported warnings and the caller asked for strict mode.
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl PromodeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromodeError::UserError(_) => exit_codes::USER_ERROR,
            PromodeError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for promode operations.
pub type Result<T> = std::result::Result<T, PromodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PromodeError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err = PromodeError::ValidationError("2 warnings".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = PromodeError::UserError("missing --description".to_string());
        assert_eq!(err.to_string(), "missing --description");

        let err = PromodeError::ValidationError("truncated word".to_string());
        assert_eq!(err.to_string(), "Validation failed: truncated word");
    }
}
