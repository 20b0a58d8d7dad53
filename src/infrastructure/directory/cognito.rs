//! AWS Cognito user pool adapter

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_cognitoidentityprovider::error::DisplayErrorContext;
use aws_sdk_cognitoidentityprovider::primitives::DateTime as AwsDateTime;
use aws_sdk_cognitoidentityprovider::types::UserType;
use aws_sdk_cognitoidentityprovider::Client as CognitoClient;
use chrono::{DateTime, Utc};

use crate::config::DirectoryConfig;
use crate::domain::directory::{
    DirectoryError, DirectoryUser, IdentityDirectory, ListUsersRequest, PaginationToken, PoolInfo,
    RawDirectoryPage,
};

const SUB_ATTRIBUTE: &str = "sub";
const EMAIL_ATTRIBUTE: &str = "email";

/// Identity directory backed by a Cognito user pool
#[derive(Debug, Clone)]
pub struct CognitoDirectory {
    client: CognitoClient,
    user_pool_id: String,
}

impl CognitoDirectory {
    pub fn new(client: CognitoClient, user_pool_id: impl Into<String>) -> Self {
        Self {
            client,
            user_pool_id: user_pool_id.into(),
        }
    }

    /// Build a client from the default AWS credential chain
    pub async fn from_config(config: &DirectoryConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }

        let sdk_config = loader.load().await;
        Self::new(CognitoClient::new(&sdk_config), config.user_pool_id.clone())
    }
}

fn sdk_error<E>(operation: &'static str, error: E) -> DirectoryError
where
    E: std::error::Error,
{
    DirectoryError::new(operation, DisplayErrorContext(&error).to_string())
}

fn to_chrono(date: &AwsDateTime) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(date.secs(), date.subsec_nanos())
}

fn attribute<'a>(user: &'a UserType, name: &str) -> Option<&'a str> {
    user.attributes()
        .iter()
        .find(|attr| attr.name() == name)
        .and_then(|attr| attr.value())
}

pub(crate) fn to_directory_user(user: &UserType) -> DirectoryUser {
    DirectoryUser {
        external_id: attribute(user, SUB_ATTRIBUTE).map(str::to_string),
        username: user.username().map(str::to_string),
        email: attribute(user, EMAIL_ATTRIBUTE).map(str::to_string),
        create_date: user.user_create_date().and_then(to_chrono),
        enabled: Some(user.enabled()),
    }
}

#[async_trait]
impl IdentityDirectory for CognitoDirectory {
    async fn list_users(&self, request: ListUsersRequest) -> Result<RawDirectoryPage, DirectoryError> {
        let output = self
            .client
            .list_users()
            .user_pool_id(&self.user_pool_id)
            .limit(request.limit)
            .set_pagination_token(request.token.map(PaginationToken::into_inner))
            .set_filter(request.filter)
            .send()
            .await
            .map_err(|e| sdk_error("ListUsers", e))?;

        // `users` stays `None` when the field was absent from the response
        Ok(RawDirectoryPage {
            users: output
                .users
                .as_ref()
                .map(|users| users.iter().map(to_directory_user).collect()),
            next_token: output.pagination_token.map(PaginationToken::from),
        })
    }

    async fn describe_pool(&self) -> Result<Option<PoolInfo>, DirectoryError> {
        let output = self
            .client
            .describe_user_pool()
            .user_pool_id(&self.user_pool_id)
            .send()
            .await
            .map_err(|e| sdk_error("DescribeUserPool", e))?;

        Ok(output.user_pool().map(|pool| PoolInfo {
            estimated_number_of_users: i64::from(pool.estimated_number_of_users()),
        }))
    }

    async fn enable_user(&self, username: &str) -> Result<(), DirectoryError> {
        self.client
            .admin_enable_user()
            .user_pool_id(&self.user_pool_id)
            .username(username)
            .send()
            .await
            .map_err(|e| sdk_error("AdminEnableUser", e))?;

        Ok(())
    }

    async fn disable_user(&self, username: &str) -> Result<(), DirectoryError> {
        self.client
            .admin_disable_user()
            .user_pool_id(&self.user_pool_id)
            .username(username)
            .send()
            .await
            .map_err(|e| sdk_error("AdminDisableUser", e))?;

        Ok(())
    }
}
