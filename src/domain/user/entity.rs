//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_user_id, UserValidationError};
use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::team::TeamId;

/// Opaque identity issued by the identity directory (`sub`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        validate_user_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for UserId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Platform-wide role of a user
///
/// This is the only source of administrative capability. Team roles never
/// grant it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlobalRole {
    /// Regular customer account
    #[default]
    Customer,
    /// Operator allowed to use the super-admin API
    SuperAdmin,
}

impl std::fmt::Display for GlobalRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "CUSTOMER"),
            Self::SuperAdmin => write!(f, "SUPER_ADMIN"),
        }
    }
}

/// Internal user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identity issued by the directory, immutable
    provider_id: UserId,
    /// First time the user was seen
    first_sign_in: DateTime<Utc>,
    /// Platform-wide role
    #[serde(default)]
    global_role: GlobalRole,
    /// Joined teams in join order
    #[serde(default)]
    team_list: Vec<TeamId>,
}

impl User {
    /// Create a new customer with no team
    pub fn new(provider_id: UserId) -> Self {
        Self {
            provider_id,
            first_sign_in: Utc::now(),
            global_role: GlobalRole::Customer,
            team_list: Vec::new(),
        }
    }

    // Getters

    pub fn provider_id(&self) -> &UserId {
        &self.provider_id
    }

    pub fn first_sign_in(&self) -> DateTime<Utc> {
        self.first_sign_in
    }

    pub fn global_role(&self) -> GlobalRole {
        self.global_role
    }

    pub fn team_list(&self) -> &[TeamId] {
        &self.team_list
    }

    // Mutators

    pub fn set_first_sign_in(&mut self, date: DateTime<Utc>) {
        self.first_sign_in = date;
    }

    pub fn set_global_role(&mut self, role: GlobalRole) {
        self.global_role = role;
    }

    /// Append a team; joining twice keeps the original position
    pub fn join_team(&mut self, team_id: TeamId) {
        if !self.team_list.contains(&team_id) {
            self.team_list.push(team_id);
        }
    }

    /// Remove a team from the list
    pub fn leave_team(&mut self, team_id: &TeamId) {
        self.team_list.retain(|id| id != team_id);
    }
}

impl StorageEntity for User {
    type Key = UserId;

    fn key(&self) -> &Self::Key {
        &self.provider_id
    }
}
