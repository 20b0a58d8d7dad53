//! In-memory storage implementation

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::storage::{Storage, StorageEntity, StorageKey};
use crate::domain::DomainError;

#[derive(Debug)]
struct Entries<E> {
    next_seq: u64,
    by_key: HashMap<String, (u64, E)>,
}

/// Thread-safe in-memory storage implementation
///
/// Listing follows first-insertion order; replacing an entity keeps its
/// position. Data is lost when the process terminates.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    entries: RwLock<Entries<E>>,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Entries {
                next_seq: 0,
                by_key: HashMap::new(),
            }),
        }
    }

    /// Creates storage pre-populated with entities, in the given order
    pub fn with_entities(entities: Vec<E>) -> Self {
        let storage = Self::new();

        if let Ok(mut entries) = storage.entries.write() {
            for entity in entities {
                Self::put(&mut entries, entity);
            }
        }

        storage
    }

    fn put(entries: &mut Entries<E>, entity: E) {
        let key = entity.key().as_str().to_string();

        match entries.by_key.get_mut(&key) {
            Some(slot) => slot.1 = entity,
            None => {
                let seq = entries.next_seq;
                entries.next_seq += 1;
                entries.by_key.insert(key, (seq, entity));
            }
        }
    }
}

fn lock_error(e: impl std::fmt::Display) -> DomainError {
    DomainError::storage(format!("Failed to acquire storage lock: {}", e))
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        let entries = self.entries.read().map_err(lock_error)?;

        Ok(entries.by_key.get(key.as_str()).map(|(_, e)| e.clone()))
    }

    async fn find_by_field(&self, field: &str, value: &str) -> Result<Vec<E>, DomainError> {
        let entries = self.entries.read().map_err(lock_error)?;

        let mut matching = Vec::new();

        for (seq, entity) in entries.by_key.values() {
            let document = serde_json::to_value(entity)
                .map_err(|e| DomainError::storage(format!("Failed to serialize entity: {}", e)))?;

            if document.get(field).and_then(serde_json::Value::as_str) == Some(value) {
                matching.push((*seq, entity));
            }
        }

        matching.sort_by_key(|(seq, _)| *seq);

        Ok(matching.into_iter().map(|(_, e)| e.clone()).collect())
    }

    async fn insert(&self, entity: E) -> Result<E, DomainError> {
        let mut entries = self.entries.write().map_err(lock_error)?;

        if entries.by_key.contains_key(entity.key().as_str()) {
            return Err(DomainError::conflict(format!(
                "Entity with key '{}' already exists",
                entity.key().as_str()
            )));
        }

        Self::put(&mut entries, entity.clone());
        Ok(entity)
    }

    async fn upsert(&self, entity: E) -> Result<E, DomainError> {
        let mut entries = self.entries.write().map_err(lock_error)?;

        Self::put(&mut entries, entity.clone());
        Ok(entity)
    }
}
