//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("User ID exceeds maximum length of {0} characters")]
    IdTooLong(usize),

    #[error("User ID cannot contain whitespace")]
    WhitespaceInId,
}

const MAX_USER_ID_LENGTH: usize = 128;

/// Validate a directory-issued user ID
///
/// The ID is opaque; only emptiness, length and whitespace are checked.
pub fn validate_user_id(id: &str) -> Result<(), UserValidationError> {
    if id.trim().is_empty() {
        return Err(UserValidationError::EmptyId);
    }

    if id.len() > MAX_USER_ID_LENGTH {
        return Err(UserValidationError::IdTooLong(MAX_USER_ID_LENGTH));
    }

    if id.chars().any(char::is_whitespace) {
        return Err(UserValidationError::WhitespaceInId);
    }

    Ok(())
}
