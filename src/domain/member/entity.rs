//! Team member entity

use serde::{Deserialize, Serialize};

use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::team::TeamId;

/// Role of a member inside a team
///
/// Team roles never grant platform-wide administrative capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    Owner,
    Admin,
    #[default]
    ReadOnly,
}

/// Invitation state of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberStatus {
    Active,
    #[default]
    Pending,
}

/// Storage key of a member: one record per (team, member) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberKey(String);

impl MemberKey {
    pub fn new(team_id: &TeamId, member_id: &str) -> Self {
        Self(format!("{}/{}", team_id, member_id))
    }
}

impl StorageKey for MemberKey {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Membership of a user, or a pending invitation, in a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    key: MemberKey,
    team_id: TeamId,
    /// Invite code while pending, user ID once accepted
    member_id: String,
    email: String,
    role: MemberRole,
    status: MemberStatus,
}

impl Member {
    pub fn new(
        team_id: TeamId,
        member_id: impl Into<String>,
        email: impl Into<String>,
        role: MemberRole,
        status: MemberStatus,
    ) -> Self {
        let member_id = member_id.into();

        Self {
            key: MemberKey::new(&team_id, &member_id),
            team_id,
            member_id,
            email: email.into(),
            role,
            status,
        }
    }

    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> MemberRole {
        self.role
    }

    pub fn status(&self) -> MemberStatus {
        self.status
    }
}

impl StorageEntity for Member {
    type Key = MemberKey;

    fn key(&self) -> &Self::Key {
        &self.key
    }
}
