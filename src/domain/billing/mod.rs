//! Billing domain - subscriptions and the plans they resolve to

mod entity;
mod resolver;

pub use entity::{Plan, Subscription, SubscriptionStatus};
pub use resolver::SubscriptionResolver;

#[cfg(test)]
pub use resolver::mock::MockSubscriptionResolver;
