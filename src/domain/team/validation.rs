//! Team validation

use thiserror::Error;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("Team ID cannot be empty")]
    EmptyId,

    #[error("Team ID cannot exceed {0} characters")]
    IdTooLong(usize),

    #[error("Team ID can only contain alphanumeric characters, hyphens and underscores")]
    InvalidIdCharacters,

    #[error("Team display name cannot be empty")]
    EmptyDisplayName,

    #[error("Team display name cannot exceed {0} characters")]
    DisplayNameTooLong(usize),
}

const MAX_TEAM_ID_LENGTH: usize = 64;
const MAX_DISPLAY_NAME_LENGTH: usize = 100;

/// Validate a team ID
pub fn validate_team_id(id: &str) -> Result<(), TeamValidationError> {
    if id.is_empty() {
        return Err(TeamValidationError::EmptyId);
    }

    if id.len() > MAX_TEAM_ID_LENGTH {
        return Err(TeamValidationError::IdTooLong(MAX_TEAM_ID_LENGTH));
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(TeamValidationError::InvalidIdCharacters);
    }

    Ok(())
}

/// Validate a team display name
pub fn validate_display_name(name: &str) -> Result<(), TeamValidationError> {
    if name.trim().is_empty() {
        return Err(TeamValidationError::EmptyDisplayName);
    }

    if name.chars().count() > MAX_DISPLAY_NAME_LENGTH {
        return Err(TeamValidationError::DisplayNameTooLong(MAX_DISPLAY_NAME_LENGTH));
    }

    Ok(())
}
