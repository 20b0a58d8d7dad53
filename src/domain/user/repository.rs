//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Exact-match lookup on the provider identity
    async fn find_by_identity(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Return the user, creating a customer record on first sight
    async fn find_or_create(&self, id: &UserId) -> Result<User, DomainError>;

    /// Persist the user, replacing any previous record
    async fn save(&self, user: &User) -> Result<(), DomainError>;
}
