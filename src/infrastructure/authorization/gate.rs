//! Super-admin authorization gate

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::user::{GlobalRole, User, UserId, UserRepository};
use crate::domain::{AuthorizationError, DomainError};
use crate::infrastructure::observability::{record_authorization, AuthorizationOutcome};

/// Decides whether a caller may run an administrative operation
///
/// Fail-closed: anything but a stored user holding [`GlobalRole::SuperAdmin`]
/// is refused.
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    users: Arc<dyn UserRepository>,
}

impl AuthorizationGate {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Returns the caller's record, untouched, when they are a super admin
    pub async fn require_super_admin(&self, user_id: &str) -> Result<User, DomainError> {
        let Ok(id) = UserId::new(user_id) else {
            record_authorization(AuthorizationOutcome::UnknownUser);
            return Err(AuthorizationError::NotFound {
                user_id: user_id.to_string(),
            }
            .into());
        };

        let user = match self.users.find_by_identity(&id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                record_authorization(AuthorizationOutcome::UnknownUser);
                warn!(user_id = %id, "Admin access refused: unknown user");
                return Err(AuthorizationError::NotFound {
                    user_id: id.to_string(),
                }
                .into());
            }
            Err(e) => {
                record_authorization(AuthorizationOutcome::Error);
                return Err(e);
            }
        };

        match user.global_role() {
            GlobalRole::SuperAdmin => {
                record_authorization(AuthorizationOutcome::Granted);
                debug!(user_id = %id, "Admin access granted");
                Ok(user)
            }
            role @ GlobalRole::Customer => {
                record_authorization(AuthorizationOutcome::Denied);
                warn!(user_id = %id, role = %role, "Admin access refused: insufficient role");
                Err(AuthorizationError::PermissionDenied { role }.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::TeamId;
    use crate::domain::user::MockUserRepository;

    fn user(id: &str, role: GlobalRole) -> User {
        let mut user = User::new(UserId::new(id).unwrap());
        user.set_global_role(role);
        user
    }

    async fn gate_with(users: Vec<User>) -> (AuthorizationGate, Arc<MockUserRepository>) {
        let repo = Arc::new(MockUserRepository::new().with_users(users).await);
        (AuthorizationGate::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_unknown_identity_is_not_found() {
        let (gate, _) = gate_with(vec![user("admin", GlobalRole::SuperAdmin)]).await;

        for id in ["ghost", "123", "Admin"] {
            let result = gate.require_super_admin(id).await;
            assert!(matches!(
                result,
                Err(DomainError::Authorization(AuthorizationError::NotFound { .. }))
            ));
        }
    }

    #[tokio::test]
    async fn test_empty_identity_is_not_found_without_lookup() {
        let (gate, repo) = gate_with(vec![]).await;

        let result = gate.require_super_admin("").await;

        assert!(matches!(
            result,
            Err(DomainError::Authorization(AuthorizationError::NotFound { .. }))
        ));
        assert!(repo.lookups().await.is_empty());
    }

    #[tokio::test]
    async fn test_customer_is_denied_with_role_context() {
        let (gate, _) = gate_with(vec![user("123", GlobalRole::Customer)]).await;

        let result = gate.require_super_admin("123").await;

        match result {
            Err(DomainError::Authorization(AuthorizationError::PermissionDenied { role })) => {
                assert_eq!(role, GlobalRole::Customer);
            }
            other => panic!("Expected PermissionDenied, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_super_admin_gets_unmodified_record() {
        let mut admin = user("123", GlobalRole::SuperAdmin);
        admin.join_team(TeamId::new("team-1").unwrap());
        let (gate, repo) = gate_with(vec![admin.clone()]).await;

        let granted = gate.require_super_admin("123").await.unwrap();
        assert_eq!(granted, admin);

        let stored = repo
            .find_by_identity(&UserId::new("123").unwrap())
            .await
            .unwrap();
        assert_eq!(stored, Some(admin));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let (gate, repo) = gate_with(vec![user("123", GlobalRole::SuperAdmin)]).await;
        repo.set_should_fail(true).await;

        let result = gate.require_super_admin("123").await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
