//! User domain
//!
//! Internal user records keyed by the identity issued by the directory,
//! carrying the global role that gates the super-admin API.

mod entity;
mod repository;
mod validation;

pub use entity::{GlobalRole, User, UserId};
pub use repository::UserRepository;
pub use validation::{validate_user_id, UserValidationError};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
