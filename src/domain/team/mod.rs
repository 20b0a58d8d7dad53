//! Team domain module
//!
//! Teams are the billing unit. A team carries at most one subscription, and
//! users reference teams through their ordered team list.

mod entity;
mod repository;
mod validation;

pub use entity::{Team, TeamId};
pub use repository::TeamRepository;
pub use validation::{validate_display_name, validate_team_id, TeamValidationError};

#[cfg(test)]
pub use repository::mock::MockTeamRepository;
