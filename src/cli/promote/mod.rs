//! Promote command - grants the super-admin role from the command line

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::user::{GlobalRole, User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::storage::StorageType;

#[derive(Debug, Args)]
pub struct PromoteArgs {
    /// Directory identity (`sub`) of the user to promote
    pub user_id: String,
}

/// Promote the user in the configured store
///
/// Refuses the in-memory backend, whose records end with this process.
pub async fn run(config: AppConfig, args: PromoteArgs) -> anyhow::Result<()> {
    require_durable_storage(&config.storage.backend)?;

    let repositories = crate::create_repositories(&config).await?;
    let user = promote(repositories.users.as_ref(), &args.user_id).await?;

    println!("{} is now {}", user.provider_id(), user.global_role());
    Ok(())
}

fn require_durable_storage(backend: &str) -> Result<(), DomainError> {
    match StorageType::parse(backend) {
        Some(StorageType::Postgres) => Ok(()),
        Some(StorageType::InMemory) => Err(DomainError::configuration(
            "promote-super-admin needs a persistent store; set storage.backend = \"postgres\"",
        )),
        None => Err(DomainError::configuration(format!(
            "Unknown storage backend '{}'",
            backend
        ))),
    }
}

/// Find or create the user, then save it with the super-admin role
pub async fn promote(users: &dyn UserRepository, user_id: &str) -> Result<User, DomainError> {
    let id = UserId::new(user_id)
        .map_err(|e| DomainError::internal(format!("Invalid user id '{}': {}", user_id, e)))?;

    let mut user = users.find_or_create(&id).await?;

    if user.global_role() == GlobalRole::SuperAdmin {
        info!(user_id = %id, "User already holds the super-admin role");
        return Ok(user);
    }

    user.set_global_role(GlobalRole::SuperAdmin);
    users.save(&user).await?;

    info!(user_id = %id, "Granted the super-admin role");
    Ok(user)
}
