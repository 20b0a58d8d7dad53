//! Subscription to plan resolution

use std::fmt::Debug;

use super::entity::{Plan, Subscription};

/// Maps a team's subscription state to exactly one plan
///
/// Implementations must be total: an absent or non-entitling subscription
/// resolves to [`Plan::free`].
pub trait SubscriptionResolver: Send + Sync + Debug {
    fn plan_for(&self, subscription: Option<&Subscription>) -> Plan;
}
