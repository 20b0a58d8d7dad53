//! User infrastructure module

mod repository;

pub use repository::StorageUserRepository;
