//! SaaS Admin API
//!
//! Super-admin backend for a multi-tenant SaaS:
//! - Privilege gate on the caller's global role
//! - Paged access to the identity directory
//! - Team and plan aggregation across directory identities
//! - Schema-driven request validation

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use api::state::AppState;
use crate::config::{AuthMode, StorageSettings};
use domain::{
    member::{Member, MemberRepository},
    team::{Team, TeamRepository},
    user::{User, UserRepository},
};
use infrastructure::{
    auth::{JwksTokenVerifier, SecretTokenVerifier, TokenVerifier},
    authorization::AuthorizationGate,
    billing::PlanCatalog,
    directory::{CognitoDirectory, DirectoryClient},
    member::StorageMemberRepository,
    storage::{PostgresConfig, StorageConfig, StorageFactory, StorageType},
    team::{StorageTeamRepository, TeamAggregator},
    user::StorageUserRepository,
};

/// Store-backed collaborators shared by the server and the CLI
#[derive(Debug, Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub teams: Arc<dyn TeamRepository>,
    pub members: Arc<dyn MemberRepository>,
}

/// Map the storage settings onto a backend configuration
pub fn storage_config(settings: &StorageSettings) -> anyhow::Result<StorageConfig> {
    let backend = StorageType::parse(&settings.backend)
        .with_context(|| format!("Unknown storage backend '{}'", settings.backend))?;

    match backend {
        StorageType::InMemory => Ok(StorageConfig::InMemory),
        StorageType::Postgres => {
            let url = settings
                .url
                .clone()
                .context("storage.url is required for the postgres backend")?;

            Ok(StorageConfig::Postgres(
                PostgresConfig::new(url).with_max_connections(settings.max_connections),
            ))
        }
    }
}

/// Connect the storage backend and build the repositories on top of it
pub async fn create_repositories(config: &AppConfig) -> anyhow::Result<Repositories> {
    let factory = StorageFactory::connect(&storage_config(&config.storage)?).await?;

    let users = factory.create::<User>("users").await?;
    let teams = factory.create::<Team>("teams").await?;
    let members = factory.create::<Member>("members").await?;

    Ok(Repositories {
        users: Arc::new(StorageUserRepository::new(users)),
        teams: Arc::new(StorageTeamRepository::new(teams)),
        members: Arc::new(StorageMemberRepository::new(members)),
    })
}

/// Build the bearer token verifier for the configured mode
///
/// JWKS mode fetches the key set once, at startup.
pub async fn create_token_verifier(config: &AppConfig) -> anyhow::Result<Arc<dyn TokenVerifier>> {
    let issuer = config.issuer();

    match config.auth.mode {
        AuthMode::Secret => {
            let secret = config
                .auth
                .secret
                .as_deref()
                .filter(|s| !s.is_empty())
                .context("auth.secret is required in secret mode")?;

            info!("Verifying caller tokens with a shared secret");
            Ok(Arc::new(SecretTokenVerifier::new(secret, issuer.as_deref())))
        }
        AuthMode::Jwks => {
            let url = config
                .jwks_url()
                .context("auth.jwks_url or directory.user_pool_id is required in jwks mode")?;

            let verifier =
                JwksTokenVerifier::fetch(&reqwest::Client::new(), &url, issuer.as_deref()).await?;
            Ok(Arc::new(verifier))
        }
    }
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    if config.directory.user_pool_id.is_empty() {
        anyhow::bail!("directory.user_pool_id must be set");
    }

    let repositories = create_repositories(config).await?;

    let plans = Arc::new(PlanCatalog::new(&config.billing.plans));
    info!(plans = plans.len(), "Plan catalog loaded");

    let directory = DirectoryClient::new(Arc::new(
        CognitoDirectory::from_config(&config.directory).await,
    ));

    let token_verifier = create_token_verifier(config).await?;

    Ok(AppState::new(
        AuthorizationGate::new(repositories.users.clone()),
        directory,
        TeamAggregator::new(repositories.users, repositories.teams.clone(), plans),
        repositories.teams,
        repositories.members,
        token_verifier,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_memory() {
        let config = storage_config(&StorageSettings::default()).unwrap();
        assert_eq!(config.storage_type(), StorageType::InMemory);
    }

    #[test]
    fn test_storage_config_postgres_requires_url() {
        let settings = StorageSettings {
            backend: "postgres".to_string(),
            url: None,
            max_connections: 5,
        };
        assert!(storage_config(&settings).is_err());

        let settings = StorageSettings {
            url: Some("postgres://localhost/admin".to_string()),
            ..settings
        };
        assert_eq!(
            storage_config(&settings).unwrap().storage_type(),
            StorageType::Postgres
        );
    }

    #[test]
    fn test_storage_config_unknown_backend() {
        let settings = StorageSettings {
            backend: "redis".to_string(),
            ..StorageSettings::default()
        };
        assert!(storage_config(&settings).is_err());
    }

    #[tokio::test]
    async fn test_secret_mode_requires_secret() {
        let mut config = AppConfig::default();
        config.auth.mode = AuthMode::Secret;

        assert!(create_token_verifier(&config).await.is_err());

        config.auth.secret = Some("dev-secret".to_string());
        assert!(create_token_verifier(&config).await.is_ok());
    }

    #[tokio::test]
    async fn test_in_memory_repositories() {
        let repositories = create_repositories(&AppConfig::default()).await.unwrap();
        let id = domain::UserId::new("sub-1").unwrap();

        let user = repositories.users.find_or_create(&id).await.unwrap();
        assert_eq!(user.global_role(), domain::GlobalRole::Customer);
    }
}
