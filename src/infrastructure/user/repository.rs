//! Storage-backed user repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::domain::storage::Storage;
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// Storage-backed implementation of UserRepository
#[derive(Debug)]
pub struct StorageUserRepository {
    storage: Arc<dyn Storage<User>>,
}

impl StorageUserRepository {
    pub fn new(storage: Arc<dyn Storage<User>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl UserRepository for StorageUserRepository {
    async fn find_by_identity(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.storage.get(id).await
    }

    async fn find_or_create(&self, id: &UserId) -> Result<User, DomainError> {
        if let Some(user) = self.storage.get(id).await? {
            return Ok(user);
        }

        match self.storage.insert(User::new(id.clone())).await {
            Ok(user) => {
                debug!(user_id = %id, "Created user record");
                Ok(user)
            }
            // Lost a creation race: the other writer's record wins
            Err(DomainError::Conflict { .. }) => self
                .storage
                .get(id)
                .await?
                .ok_or_else(|| DomainError::storage(format!("User '{}' vanished after conflict", id))),
            Err(e) => Err(e),
        }
    }

    async fn save(&self, user: &User) -> Result<(), DomainError> {
        self.storage.upsert(user.clone()).await?;
        Ok(())
    }
}
