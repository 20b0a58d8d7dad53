//! Storage factory for runtime backend selection

use std::sync::Arc;

use sqlx::postgres::PgPool;
use tracing::info;

use crate::domain::storage::{Storage, StorageEntity};
use crate::domain::DomainError;

use super::in_memory::InMemoryStorage;
use super::postgres::{PostgresConfig, PostgresStorage};

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    InMemory,
    Postgres,
}

impl StorageType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    InMemory,
    Postgres(PostgresConfig),
}

impl StorageConfig {
    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

/// Creates the per-entity stores; Postgres stores share one pool
#[derive(Debug, Clone)]
pub struct StorageFactory {
    pool: Option<PgPool>,
}

impl StorageFactory {
    /// Connects to the configured backend
    pub async fn connect(config: &StorageConfig) -> Result<Self, DomainError> {
        let pool = match config {
            StorageConfig::InMemory => None,
            StorageConfig::Postgres(pg_config) => Some(pg_config.connect().await?),
        };

        info!(backend = ?config.storage_type(), "Storage backend ready");

        Ok(Self { pool })
    }

    pub fn in_memory() -> Self {
        Self { pool: None }
    }

    /// Creates the store for one entity type, creating its table when needed
    pub async fn create<E>(&self, table_name: &str) -> Result<Arc<dyn Storage<E>>, DomainError>
    where
        E: StorageEntity + 'static,
    {
        match &self.pool {
            None => Ok(Arc::new(InMemoryStorage::<E>::new())),
            Some(pool) => {
                let storage = PostgresStorage::<E>::new(pool.clone(), table_name);
                storage.ensure_table().await?;
                Ok(Arc::new(storage))
            }
        }
    }
}
