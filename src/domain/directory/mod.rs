//! Identity directory domain
//!
//! The directory is the external system of record for end-user accounts.
//! The core only sees it through [`IdentityDirectory`].

mod entity;
mod port;

pub use entity::{
    DirectoryPage, DirectoryUser, ListUsersRequest, PaginationToken, PoolInfo, RawDirectoryPage,
};
pub use port::{DirectoryError, IdentityDirectory};

#[cfg(test)]
pub use port::MockIdentityDirectory;
