//! Identity directory infrastructure

mod client;
mod cognito;

pub use client::{DirectoryClient, DIRECTORY_PAGE_SIZE};
pub use cognito::CognitoDirectory;
