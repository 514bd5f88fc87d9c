//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Not a known compass position
    #[error("Invalid beach position: {0}")]
    InvalidPosition(String),

    /// Identifier is empty or malformed
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("name must not be empty".to_string());
        assert_eq!(err.to_string(), "Validation failed: name must not be empty");
    }

    #[test]
    fn invalid_position_error_message() {
        let err = DomainError::InvalidPosition("NNW".to_string());
        assert_eq!(err.to_string(), "Invalid beach position: NNW");
    }

    #[test]
    fn invalid_identifier_error_message() {
        let err = DomainError::InvalidIdentifier("empty user id".to_string());
        assert_eq!(err.to_string(), "Invalid identifier: empty user id");
    }
}
