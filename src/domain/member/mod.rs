//! Team membership domain

mod entity;
mod repository;

pub use entity::{Member, MemberKey, MemberRole, MemberStatus};
pub use repository::MemberRepository;

#[cfg(test)]
pub use repository::mock::MockMemberRepository;
