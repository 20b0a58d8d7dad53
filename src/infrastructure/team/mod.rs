//! Team infrastructure implementations

mod aggregator;
mod repository;

pub use aggregator::{TeamAggregator, TeamSummary, TeamWithPlan};
pub use repository::StorageTeamRepository;
