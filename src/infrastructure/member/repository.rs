//! Storage-backed member repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::member::{Member, MemberRepository};
use crate::domain::storage::Storage;
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// Serialized name of `Member::team_id`
const TEAM_ID_FIELD: &str = "teamId";

/// Storage-backed implementation of MemberRepository
#[derive(Debug)]
pub struct StorageMemberRepository {
    storage: Arc<dyn Storage<Member>>,
}

impl StorageMemberRepository {
    pub fn new(storage: Arc<dyn Storage<Member>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl MemberRepository for StorageMemberRepository {
    async fn find_all_by_team(&self, team_id: &TeamId) -> Result<Vec<Member>, DomainError> {
        self.storage
            .find_by_field(TEAM_ID_FIELD, team_id.as_str())
            .await
    }

    async fn save(&self, member: Member) -> Result<Member, DomainError> {
        self.storage.upsert(member).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::{MemberRole, MemberStatus};
    use crate::infrastructure::storage::InMemoryStorage;

    fn member(team: &str, id: &str) -> Member {
        Member::new(
            TeamId::new(team).unwrap(),
            id,
            format!("{}@example.com", id),
            MemberRole::Admin,
            MemberStatus::Active,
        )
    }

    #[tokio::test]
    async fn test_find_all_by_team_keeps_store_order() {
        let repo = StorageMemberRepository::new(Arc::new(InMemoryStorage::with_entities(vec![
            member("team-1", "zed"),
            member("team-2", "other"),
            member("team-1", "amy"),
        ])));

        let found = repo.find_all_by_team(&TeamId::new("team-1").unwrap()).await.unwrap();

        let ids: Vec<&str> = found.iter().map(|m| m.member_id()).collect();
        assert_eq!(ids, vec!["zed", "amy"]);
    }

    #[tokio::test]
    async fn test_saved_members_listed_in_insertion_order() {
        let repo = StorageMemberRepository::new(Arc::new(InMemoryStorage::new()));

        for id in ["mia", "bob", "kai"] {
            repo.save(member("team-1", id)).await.unwrap();
        }
        repo.save(member("team-2", "ann")).await.unwrap();

        let found = repo.find_all_by_team(&TeamId::new("team-1").unwrap()).await.unwrap();

        let ids: Vec<&str> = found.iter().map(|m| m.member_id()).collect();
        assert_eq!(ids, vec!["mia", "bob", "kai"]);
        assert!(found.iter().all(|m| m.team_id().as_str() == "team-1"));
    }

    #[tokio::test]
    async fn test_team_without_members() {
        let repo = StorageMemberRepository::new(Arc::new(InMemoryStorage::new()));

        let found = repo.find_all_by_team(&TeamId::new("team-1").unwrap()).await.unwrap();
        assert!(found.is_empty());
    }
}
