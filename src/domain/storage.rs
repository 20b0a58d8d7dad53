//! Keyed record storage
//!
//! The user, team and member stores are thin repositories over [`Storage`],
//! so the in-memory and Postgres backends serve all three.

use std::fmt::Debug;
use std::hash::Hash;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::DomainError;

/// Key of a stored record, rendered as text by text-keyed backends
pub trait StorageKey: Clone + Debug + Send + Sync + Eq + Hash {
    fn as_str(&self) -> &str;
}

/// Record persisted as a JSON document under its key
pub trait StorageEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    type Key: StorageKey;

    fn key(&self) -> &Self::Key;
}

/// `find_by_field` returns entities in insertion order on every backend.
#[async_trait]
pub trait Storage<E>: Send + Sync + Debug
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError>;

    /// Entities for `keys` in the order of `keys`; unknown keys are skipped
    async fn get_many(&self, keys: &[E::Key]) -> Result<Vec<E>, DomainError> {
        let mut found = Vec::with_capacity(keys.len());

        for key in keys {
            if let Some(entity) = self.get(key).await? {
                found.push(entity);
            }
        }

        Ok(found)
    }

    /// Entities whose top-level JSON `field` holds the string `value`
    async fn find_by_field(&self, field: &str, value: &str) -> Result<Vec<E>, DomainError>;

    /// Fails with [`DomainError::Conflict`] when the key is taken
    async fn insert(&self, entity: E) -> Result<E, DomainError>;

    async fn upsert(&self, entity: E) -> Result<E, DomainError>;
}
