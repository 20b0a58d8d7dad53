//! Authentication infrastructure module
//!
//! Verifies the bearer tokens issued by the identity provider.

mod jwt;

pub use jwt::{JwksTokenVerifier, SecretTokenVerifier, TokenClaims, TokenError, TokenVerifier};
