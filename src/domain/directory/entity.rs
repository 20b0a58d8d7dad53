//! Identity directory types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Continuation cursor issued by the identity directory
///
/// Opaque: never parsed or built here, only handed back to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaginationToken(String);

impl PaginationToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for PaginationToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PaginationToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Account as listed by the identity directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryUser {
    /// Stable identity (`sub`), matches the internal user's provider ID
    #[serde(rename = "id")]
    pub external_id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub create_date: Option<DateTime<Utc>>,
    pub enabled: Option<bool>,
}

impl DirectoryUser {
    pub fn with_external_id(external_id: impl Into<String>) -> Self {
        Self {
            external_id: Some(external_id.into()),
            ..Self::default()
        }
    }
}

/// One page of directory users
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryPage {
    #[serde(rename = "userList")]
    pub users: Vec<DirectoryUser>,
    #[serde(rename = "paginationToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<PaginationToken>,
}

/// Parameters of a single listing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListUsersRequest {
    pub limit: i32,
    pub token: Option<PaginationToken>,
    pub filter: Option<String>,
}

/// Listing response as returned by the directory
///
/// `users` is `None` when the response carried no user list at all, which
/// differs from an empty page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDirectoryPage {
    pub users: Option<Vec<DirectoryUser>>,
    pub next_token: Option<PaginationToken>,
}

/// User pool description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolInfo {
    pub estimated_number_of_users: i64,
}
