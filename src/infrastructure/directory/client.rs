//! Identity directory client

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::domain::directory::{
    DirectoryError, DirectoryPage, IdentityDirectory, ListUsersRequest, PaginationToken,
};
use crate::domain::DomainError;
use crate::infrastructure::observability::record_directory_request;

/// Users per listing page
pub const DIRECTORY_PAGE_SIZE: i32 = 20;

/// Paged listing, size estimate and account toggling on the identity directory
///
/// Every failure of the underlying directory surfaces as
/// [`DomainError::DirectoryUnavailable`]; nothing is retried.
#[derive(Clone)]
pub struct DirectoryClient {
    directory: Arc<dyn IdentityDirectory>,
}

impl std::fmt::Debug for DirectoryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryClient")
            .field("page_size", &DIRECTORY_PAGE_SIZE)
            .finish_non_exhaustive()
    }
}

fn unavailable(error: DirectoryError) -> DomainError {
    error!(operation = error.operation, error = %error.message, "Directory call failed");
    DomainError::directory_unavailable(error.to_string())
}

impl DirectoryClient {
    pub fn new(directory: Arc<dyn IdentityDirectory>) -> Self {
        Self { directory }
    }

    /// List one page of users; `token` is forwarded untouched
    pub async fn list_users(
        &self,
        token: Option<PaginationToken>,
        filter: Option<String>,
    ) -> Result<DirectoryPage, DomainError> {
        let started = Instant::now();
        let request = ListUsersRequest {
            limit: DIRECTORY_PAGE_SIZE,
            token,
            filter,
        };

        let result = self.directory.list_users(request).await;
        record_directory_request("list_users", result.is_ok(), started.elapsed());

        let raw = result.map_err(unavailable)?;

        let Some(users) = raw.users else {
            error!("Directory listing response carried no user list");
            return Err(DomainError::directory_unavailable(
                "Impossible to get users from the identity directory",
            ));
        };

        debug!(
            count = users.len(),
            has_more = raw.next_token.is_some(),
            "Listed directory users"
        );

        Ok(DirectoryPage {
            users,
            next_token: raw.next_token,
        })
    }

    /// Approximate number of accounts in the directory
    pub async fn estimate_user_count(&self) -> Result<i64, DomainError> {
        let started = Instant::now();
        let result = self.directory.describe_pool().await;
        record_directory_request("describe_pool", result.is_ok(), started.elapsed());

        match result.map_err(unavailable)? {
            Some(pool) => Ok(pool.estimated_number_of_users),
            None => {
                error!("Directory description response carried no pool");
                Err(DomainError::directory_unavailable(
                    "Impossible to get the estimated number of users",
                ))
            }
        }
    }

    /// Enable or disable an account, idempotent
    pub async fn set_user_enabled(&self, username: &str, enabled: bool) -> Result<(), DomainError> {
        let started = Instant::now();

        let (operation, result) = if enabled {
            ("enable_user", self.directory.enable_user(username).await)
        } else {
            ("disable_user", self.directory.disable_user(username).await)
        };
        record_directory_request(operation, result.is_ok(), started.elapsed());

        result.map_err(unavailable)?;

        info!(username = %username, enabled, "Directory user status updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directory::{
        DirectoryUser, MockIdentityDirectory, PoolInfo, RawDirectoryPage,
    };

    fn client(mock: MockIdentityDirectory) -> DirectoryClient {
        DirectoryClient::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_list_users_uses_fixed_page_size_and_forwards_token() {
        let mut mock = MockIdentityDirectory::new();
        mock.expect_list_users()
            .withf(|req| {
                req.limit == 20
                    && req.token.as_ref().map(|t| t.as_str()) == Some("opaque+token==")
                    && req.filter.is_none()
            })
            .times(1)
            .returning(|_| {
                Ok(RawDirectoryPage {
                    users: Some(vec![DirectoryUser::with_external_id("sub-1")]),
                    next_token: Some(PaginationToken::from("next")),
                })
            });

        let page = client(mock)
            .list_users(Some(PaginationToken::from("opaque+token==")), None)
            .await
            .unwrap();

        assert_eq!(page.users.len(), 1);
        assert_eq!(page.next_token, Some(PaginationToken::from("next")));
    }

    #[tokio::test]
    async fn test_list_users_first_page_without_token() {
        let mut mock = MockIdentityDirectory::new();
        mock.expect_list_users()
            .withf(|req| req.token.is_none())
            .times(1)
            .returning(|_| {
                Ok(RawDirectoryPage {
                    users: Some(vec![]),
                    next_token: None,
                })
            });

        let page = client(mock).list_users(None, None).await.unwrap();

        assert!(page.users.is_empty());
        assert!(page.next_token.is_none());
    }

    #[tokio::test]
    async fn test_list_users_missing_list_is_unavailable() {
        let mut mock = MockIdentityDirectory::new();
        mock.expect_list_users()
            .returning(|_| Ok(RawDirectoryPage::default()));

        let result = client(mock).list_users(None, None).await;
        assert!(matches!(result, Err(DomainError::DirectoryUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_list_users_transport_error_is_unavailable() {
        let mut mock = MockIdentityDirectory::new();
        mock.expect_list_users()
            .returning(|_| Err(DirectoryError::new("ListUsers", "connection reset")));

        let result = client(mock).list_users(None, None).await;
        assert!(matches!(result, Err(DomainError::DirectoryUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_estimate_user_count() {
        let mut mock = MockIdentityDirectory::new();
        mock.expect_describe_pool().returning(|| {
            Ok(Some(PoolInfo {
                estimated_number_of_users: 1234,
            }))
        });

        assert_eq!(client(mock).estimate_user_count().await.unwrap(), 1234);
    }

    #[tokio::test]
    async fn test_estimate_without_pool_is_unavailable() {
        let mut mock = MockIdentityDirectory::new();
        mock.expect_describe_pool().returning(|| Ok(None));

        let result = client(mock).estimate_user_count().await;
        assert!(matches!(result, Err(DomainError::DirectoryUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_set_user_enabled_dispatches() {
        let mut mock = MockIdentityDirectory::new();
        mock.expect_enable_user()
            .withf(|username| username == "alice")
            .times(1)
            .returning(|_| Ok(()));
        mock.expect_disable_user()
            .withf(|username| username == "bob")
            .times(1)
            .returning(|_| Ok(()));

        let client = client(mock);
        client.set_user_enabled("alice", true).await.unwrap();
        client.set_user_enabled("bob", false).await.unwrap();
    }

    #[tokio::test]
    async fn test_set_user_enabled_error_is_unavailable() {
        let mut mock = MockIdentityDirectory::new();
        mock.expect_disable_user()
            .returning(|_| Err(DirectoryError::new("AdminDisableUser", "UserNotFoundException")));

        let result = client(mock).set_user_enabled("ghost", false).await;
        assert!(matches!(result, Err(DomainError::DirectoryUnavailable { .. })));
    }
}
