//! Application state for shared services

use std::sync::Arc;

use crate::domain::member::MemberRepository;
use crate::domain::team::TeamRepository;
use crate::domain::ValidationEngine;
use crate::infrastructure::auth::TokenVerifier;
use crate::infrastructure::authorization::AuthorizationGate;
use crate::infrastructure::directory::DirectoryClient;
use crate::infrastructure::team::TeamAggregator;

/// Everything the admin handlers need, cheap to clone per request
#[derive(Clone, Debug)]
pub struct AppState {
    pub gate: AuthorizationGate,
    pub directory: DirectoryClient,
    pub aggregator: TeamAggregator,
    pub teams: Arc<dyn TeamRepository>,
    pub members: Arc<dyn MemberRepository>,
    pub token_verifier: Arc<dyn TokenVerifier>,
    pub validation: ValidationEngine,
}

impl AppState {
    pub fn new(
        gate: AuthorizationGate,
        directory: DirectoryClient,
        aggregator: TeamAggregator,
        teams: Arc<dyn TeamRepository>,
        members: Arc<dyn MemberRepository>,
        token_verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        Self {
            gate,
            directory,
            aggregator,
            teams,
            members,
            token_verifier,
            validation: ValidationEngine::new(),
        }
    }
}
