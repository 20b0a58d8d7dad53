//! Configured price to plan catalog

use std::collections::HashMap;

use tracing::warn;

use crate::config::PlanMapping;
use crate::domain::billing::{Plan, Subscription, SubscriptionResolver};

/// Resolves plans from the configured price mapping
#[derive(Debug, Clone, Default)]
pub struct PlanCatalog {
    by_price: HashMap<String, Plan>,
}

impl PlanCatalog {
    pub fn new(mappings: &[PlanMapping]) -> Self {
        let by_price = mappings
            .iter()
            .map(|m| (m.price_id.clone(), Plan::new(&m.id, &m.name)))
            .collect();

        Self { by_price }
    }

    pub fn len(&self) -> usize {
        self.by_price.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_price.is_empty()
    }
}

impl SubscriptionResolver for PlanCatalog {
    fn plan_for(&self, subscription: Option<&Subscription>) -> Plan {
        let Some(subscription) = subscription.filter(|s| s.is_entitled()) else {
            return Plan::free();
        };

        match self.by_price.get(subscription.price_id()) {
            Some(plan) => plan.clone(),
            None => {
                warn!(
                    subscription_id = %subscription.id(),
                    price_id = %subscription.price_id(),
                    "Subscription price has no configured plan, using free plan"
                );
                Plan::free()
            }
        }
    }
}
