//! Billing infrastructure

mod plan_catalog;
mod revenue;

pub use plan_catalog::PlanCatalog;
pub use revenue::{
    sample_revenue, RevenuePoint, SAMPLE_CUSTOMERS, SAMPLE_MRR, SAMPLE_TOTAL_REVENUE,
};
