//! Billing entities

use serde::{Deserialize, Serialize};

/// Lifecycle status of a billing subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Trialing,
    PastDue,
    Canceled,
    Incomplete,
    Unpaid,
}

impl SubscriptionStatus {
    /// Whether a subscription in this status grants its plan
    pub fn grants_plan(&self) -> bool {
        match self {
            Self::Active | Self::Trialing | Self::PastDue => true,
            Self::Canceled | Self::Incomplete | Self::Unpaid => false,
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Active => "active",
            Self::Trialing => "trialing",
            Self::PastDue => "past_due",
            Self::Canceled => "canceled",
            Self::Incomplete => "incomplete",
            Self::Unpaid => "unpaid",
        };
        write!(f, "{}", value)
    }
}

/// Subscription attached to a team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    id: String,
    price_id: String,
    status: SubscriptionStatus,
}

impl Subscription {
    pub fn new(id: impl Into<String>, price_id: impl Into<String>, status: SubscriptionStatus) -> Self {
        Self {
            id: id.into(),
            price_id: price_id.into(),
            status,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn price_id(&self) -> &str {
        &self.price_id
    }

    pub fn status(&self) -> SubscriptionStatus {
        self.status
    }

    /// Whether the subscription currently grants its price's plan
    pub fn is_entitled(&self) -> bool {
        self.status.grants_plan()
    }
}

/// Billing tier derived from a subscription, never stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
}

impl Plan {
    pub const FREE_ID: &'static str = "FREE";
    pub const FREE_NAME: &'static str = "Free";

    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Fallback plan for teams without an entitling subscription
    pub fn free() -> Self {
        Self::new(Self::FREE_ID, Self::FREE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_entitlement() {
        assert!(SubscriptionStatus::Active.grants_plan());
        assert!(SubscriptionStatus::Trialing.grants_plan());
        assert!(SubscriptionStatus::PastDue.grants_plan());
        assert!(!SubscriptionStatus::Canceled.grants_plan());
        assert!(!SubscriptionStatus::Incomplete.grants_plan());
        assert!(!SubscriptionStatus::Unpaid.grants_plan());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&SubscriptionStatus::PastDue).unwrap();
        assert_eq!(json, "\"past_due\"");
        assert_eq!(SubscriptionStatus::PastDue.to_string(), "past_due");
    }

    #[test]
    fn test_free_plan() {
        let plan = Plan::free();
        assert_eq!(plan.id, "FREE");
        assert_eq!(plan.name, "Free");
    }

    #[test]
    fn test_subscription_json_shape() {
        let subscription = Subscription::new("sub_1", "price_pro", SubscriptionStatus::Active);
        let json = serde_json::to_value(&subscription).unwrap();

        assert_eq!(json["priceId"], "price_pro");
        assert_eq!(json["status"], "active");
        assert!(subscription.is_entitled());
    }
}
