//! Identity directory port

use async_trait::async_trait;
use thiserror::Error;

use super::entity::{ListUsersRequest, PoolInfo, RawDirectoryPage};

/// Failure reported by a directory adapter
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{operation} failed: {message}")]
pub struct DirectoryError {
    pub operation: &'static str,
    pub message: String,
}

impl DirectoryError {
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

/// Remote identity-management API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Fetch one page of users
    async fn list_users(&self, request: ListUsersRequest) -> Result<RawDirectoryPage, DirectoryError>;

    /// Describe the user pool; `None` when the response had no pool
    async fn describe_pool(&self) -> Result<Option<PoolInfo>, DirectoryError>;

    async fn enable_user(&self, username: &str) -> Result<(), DirectoryError>;

    async fn disable_user(&self, username: &str) -> Result<(), DirectoryError>;
}
