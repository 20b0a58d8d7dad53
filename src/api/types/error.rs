//! Error envelope returned by every admin endpoint

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::domain::{AuthorizationError, DomainError, ErrorCode, FieldError};

/// Payload of the `errors` key: a single code, or the field violations of a
/// rejected request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiErrors {
    Code(ErrorCode),
    Fields(Vec<FieldError>),
}

/// `{ "errors": CODE, "message": ... }` or `{ "errors": [{ "param", "type" }] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub errors: ApiErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                errors: ApiErrors::Code(code),
                message: Some(message.into()),
            },
        }
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            response: ApiErrorResponse {
                errors: ApiErrors::Fields(errors),
                message: None,
            },
        }
    }

    /// Request could not be read at all, before any schema ran
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorCode::InvalidRequest, message)
    }

    /// Caller presented no usable bearer token
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, ErrorCode::IncorrectUserId, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InternalServerError,
            message,
        )
    }

    /// Code of a single-code envelope
    pub fn code(&self) -> Option<ErrorCode> {
        match &self.response.errors {
            ApiErrors::Code(code) => Some(*code),
            ApiErrors::Fields(_) => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let code = err.code();

        match err {
            DomainError::Authorization(AuthorizationError::NotFound { .. }) => {
                warn!(error = %err, "Caller has no user record");
                Self::new(StatusCode::UNAUTHORIZED, code, err.to_string())
            }
            DomainError::Authorization(AuthorizationError::PermissionDenied { .. }) => {
                warn!(error = %err, "Caller lacks the super-admin role");
                Self::new(StatusCode::FORBIDDEN, code, err.to_string())
            }
            DomainError::RequestValidation { errors } => Self::validation(errors),
            DomainError::NotFound { ref message, .. } => {
                Self::new(StatusCode::NOT_FOUND, code, message.clone())
            }
            DomainError::DirectoryUnavailable { .. } => {
                Self::new(StatusCode::BAD_GATEWAY, code, err.to_string())
            }
            DomainError::Conflict { .. } => Self::new(StatusCode::CONFLICT, code, err.to_string()),
            DomainError::Storage { .. }
            | DomainError::Configuration { .. }
            | DomainError::Internal { .. } => {
                error!(error = %err, "Request failed with an internal error");
                Self::internal("Internal server error")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.response.errors, &self.response.message) {
            (ApiErrors::Code(code), Some(message)) => write!(f, "{}: {}", code, message),
            (ApiErrors::Code(code), None) => write!(f, "{}", code),
            (ApiErrors::Fields(fields), _) => {
                write!(f, "{} invalid field(s)", fields.len())
            }
        }
    }
}

impl std::error::Error for ApiError {}
