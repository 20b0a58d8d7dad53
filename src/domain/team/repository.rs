//! Team repository trait

use async_trait::async_trait;

use super::entity::{Team, TeamId};
use crate::domain::DomainError;

/// Read access to teams
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Get a team by ID
    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    /// Get the teams for `ids`, in the order of `ids`; unknown IDs are dropped
    async fn find_many_by_ids(&self, ids: &[TeamId]) -> Result<Vec<Team>, DomainError>;

    /// Create or replace a team
    async fn save(&self, team: Team) -> Result<Team, DomainError>;
}
