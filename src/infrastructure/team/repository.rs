//! Storage-backed team repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::storage::Storage;
use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::DomainError;

/// Storage-backed implementation of TeamRepository
#[derive(Debug)]
pub struct StorageTeamRepository {
    storage: Arc<dyn Storage<Team>>,
}

impl StorageTeamRepository {
    pub fn new(storage: Arc<dyn Storage<Team>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl TeamRepository for StorageTeamRepository {
    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        self.storage.get(id).await
    }

    async fn find_many_by_ids(&self, ids: &[TeamId]) -> Result<Vec<Team>, DomainError> {
        self.storage.get_many(ids).await
    }

    async fn save(&self, team: Team) -> Result<Team, DomainError> {
        self.storage.upsert(team).await
    }
}
