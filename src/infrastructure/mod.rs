//! Infrastructure layer - External service implementations

pub mod auth;
pub mod authorization;
pub mod billing;
pub mod directory;
pub mod logging;
pub mod member;
pub mod observability;
pub mod storage;
pub mod team;
pub mod user;
