//! Team entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_display_name, validate_team_id, TeamValidationError};
use crate::domain::billing::Subscription;
use crate::domain::storage::{StorageEntity, StorageKey};

/// Team identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamId(String);

impl TeamId {
    /// Create a new TeamId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, TeamValidationError> {
        let id = id.into();
        validate_team_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamId {
    type Error = TeamValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamId> for String {
    fn from(id: TeamId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for TeamId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Team entity as read by the admin API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Unique identifier
    id: TeamId,
    /// Display name
    display_name: String,
    /// Billing customer in Stripe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stripe_customer_id: Option<String>,
    /// Current billing subscription
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subscription: Option<Subscription>,
}

impl Team {
    /// Create a new team without billing data
    pub fn new(id: TeamId, display_name: impl Into<String>) -> Result<Self, TeamValidationError> {
        let display_name = display_name.into();
        validate_display_name(&display_name)?;

        Ok(Self {
            id,
            display_name,
            stripe_customer_id: None,
            subscription: None,
        })
    }

    /// Set the Stripe customer (builder pattern)
    pub fn with_stripe_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.stripe_customer_id = Some(customer_id.into());
        self
    }

    /// Set the subscription (builder pattern)
    pub fn with_subscription(mut self, subscription: Subscription) -> Self {
        self.subscription = Some(subscription);
        self
    }

    // Getters

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn stripe_customer_id(&self) -> Option<&str> {
        self.stripe_customer_id.as_deref()
    }

    pub fn subscription(&self) -> Option<&Subscription> {
        self.subscription.as_ref()
    }

    // Mutators

    /// Update the display name
    pub fn set_display_name(
        &mut self,
        display_name: impl Into<String>,
    ) -> Result<(), TeamValidationError> {
        let display_name = display_name.into();
        validate_display_name(&display_name)?;
        self.display_name = display_name;
        Ok(())
    }
}

impl StorageEntity for Team {
    type Key = TeamId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::SubscriptionStatus;

    #[test]
    fn test_team_creation() {
        let team = Team::new(TeamId::new("team-1").unwrap(), "Acme").unwrap();

        assert_eq!(team.id().as_str(), "team-1");
        assert_eq!(team.display_name(), "Acme");
        assert!(team.stripe_customer_id().is_none());
        assert!(team.subscription().is_none());
    }

    #[test]
    fn test_team_with_billing() {
        let subscription = Subscription::new("sub_1", "price_pro", SubscriptionStatus::Active);
        let team = Team::new(TeamId::new("team-1").unwrap(), "Acme")
            .unwrap()
            .with_stripe_customer_id("cus_123")
            .with_subscription(subscription.clone());

        assert_eq!(team.stripe_customer_id(), Some("cus_123"));
        assert_eq!(team.subscription(), Some(&subscription));
    }

    #[test]
    fn test_set_display_name() {
        let mut team = Team::new(TeamId::new("team-1").unwrap(), "Acme").unwrap();

        team.set_display_name("New Team display name").unwrap();
        assert_eq!(team.display_name(), "New Team display name");

        assert!(team.set_display_name("").is_err());
        assert_eq!(team.display_name(), "New Team display name");
    }

    #[test]
    fn test_team_serialization() {
        let team = Team::new(TeamId::new("team-1").unwrap(), "Acme")
            .unwrap()
            .with_stripe_customer_id("cus_123");

        let json = serde_json::to_value(&team).unwrap();
        assert_eq!(json["displayName"], "Acme");
        assert_eq!(json["stripeCustomerId"], "cus_123");
        assert!(json.get("subscription").is_none());
    }
}
