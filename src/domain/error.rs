use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::user::GlobalRole;
use super::validation::FieldError;

/// Stable machine-readable error codes exposed at the transport boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    IncorrectUserId,
    IncorrectGlobalPermission,
    IncorrectTeamId,
    DirectoryUnavailable,
    InvalidRequest,
    InternalServerError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IncorrectUserId => "INCORRECT_USER_ID",
            Self::IncorrectGlobalPermission => "INCORRECT_GLOBAL_PERMISSION",
            Self::IncorrectTeamId => "INCORRECT_TEAM_ID",
            Self::DirectoryUnavailable => "DIRECTORY_UNAVAILABLE",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons the super-admin gate refuses a caller
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthorizationError {
    #[error("Incorrect UserID: no user record for '{user_id}'")]
    NotFound { user_id: String },

    /// The held role is diagnostic context only
    #[error("The user global role {role} is not able to perform the action")]
    PermissionDenied { role: GlobalRole },
}

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    #[error("Identity directory unavailable: {message}")]
    DirectoryUnavailable { message: String },

    #[error("Request validation failed with {} error(s)", .errors.len())]
    RequestValidation { errors: Vec<FieldError> },

    #[error("Not found: {message}")]
    NotFound { code: ErrorCode, message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn directory_unavailable(message: impl Into<String>) -> Self {
        Self::DirectoryUnavailable {
            message: message.into(),
        }
    }

    pub fn request_validation(errors: Vec<FieldError>) -> Self {
        Self::RequestValidation { errors }
    }

    pub fn team_not_found(team_id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            code: ErrorCode::IncorrectTeamId,
            message: format!("Incorrect TeamID: '{}'", team_id),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Code serialized into the error envelope
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Authorization(AuthorizationError::NotFound { .. }) => ErrorCode::IncorrectUserId,
            Self::Authorization(AuthorizationError::PermissionDenied { .. }) => {
                ErrorCode::IncorrectGlobalPermission
            }
            Self::DirectoryUnavailable { .. } => ErrorCode::DirectoryUnavailable,
            Self::RequestValidation { .. } => ErrorCode::InvalidRequest,
            Self::NotFound { code, .. } => *code,
            Self::Conflict { .. }
            | Self::Storage { .. }
            | Self::Configuration { .. }
            | Self::Internal { .. } => ErrorCode::InternalServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_codes() {
        let not_found: DomainError = AuthorizationError::NotFound {
            user_id: "user-123".to_string(),
        }
        .into();
        assert_eq!(not_found.code(), ErrorCode::IncorrectUserId);

        let denied: DomainError = AuthorizationError::PermissionDenied {
            role: GlobalRole::Customer,
        }
        .into();
        assert_eq!(denied.code(), ErrorCode::IncorrectGlobalPermission);
        assert_eq!(
            denied.to_string(),
            "The user global role CUSTOMER is not able to perform the action"
        );
    }

    #[test]
    fn test_team_not_found_code() {
        let error = DomainError::team_not_found("team-404");
        assert_eq!(error.code(), ErrorCode::IncorrectTeamId);
        assert_eq!(error.to_string(), "Not found: Incorrect TeamID: 'team-404'");
    }

    #[test]
    fn test_request_validation_message() {
        let error = DomainError::request_validation(vec![FieldError::new("teamId", "too_small")]);
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.to_string(), "Request validation failed with 1 error(s)");
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::IncorrectGlobalPermission).unwrap();
        assert_eq!(json, "\"INCORRECT_GLOBAL_PERMISSION\"");
        assert_eq!(ErrorCode::DirectoryUnavailable.to_string(), "DIRECTORY_UNAVAILABLE");
    }
}
