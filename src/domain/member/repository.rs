//! Member repository trait

use async_trait::async_trait;

use super::entity::Member;
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// Read access to team members
#[async_trait]
pub trait MemberRepository: Send + Sync + std::fmt::Debug {
    /// All members of a team, in the order the store first saw them
    async fn find_all_by_team(&self, team_id: &TeamId) -> Result<Vec<Member>, DomainError>;

    /// Create or replace a member
    async fn save(&self, member: Member) -> Result<Member, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::domain::storage::StorageEntity;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock implementation for testing
    #[derive(Debug, Default)]
    pub struct MockMemberRepository {
        members: Arc<RwLock<Vec<Member>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockMemberRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn with_members(self, members: Vec<Member>) -> Self {
            self.members.write().await.extend(members);
            self
        }

        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }
    }

    #[async_trait]
    impl MemberRepository for MockMemberRepository {
        async fn find_all_by_team(&self, team_id: &TeamId) -> Result<Vec<Member>, DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }

            Ok(self
                .members
                .read()
                .await
                .iter()
                .filter(|m| m.team_id() == team_id)
                .cloned()
                .collect())
        }

        async fn save(&self, member: Member) -> Result<Member, DomainError> {
            let mut members = self.members.write().await;

            match members.iter_mut().find(|m| m.key() == member.key()) {
                Some(existing) => *existing = member.clone(),
                None => members.push(member.clone()),
            }

            Ok(member)
        }
    }
}
