//! Bearer token verification against a shared secret or a JWKS

use std::fmt::Debug;

use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Reasons a bearer token is rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token signed with unknown key '{0}'")]
    UnknownKey(String),

    #[error("Invalid token: {0}")]
    Invalid(String),

    #[error("Failed to load signing keys: {0}")]
    KeySet(String),
}

/// Claims read from an identity provider token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Directory identity of the caller
    pub sub: String,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_use: Option<String>,
}

/// Verifies bearer tokens and extracts the caller claims
pub trait TokenVerifier: Send + Sync + Debug {
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}

fn validation_for(algorithm: Algorithm, issuer: Option<&str>) -> Validation {
    let mut validation = Validation::new(algorithm);
    // Identity provider access tokens carry no audience
    validation.validate_aud = false;

    if let Some(issuer) = issuer {
        validation.set_issuer(&[issuer]);
    }

    validation
}

/// Only access tokens identify a caller; ID tokens are meant for app clients
fn require_access_token(claims: &TokenClaims) -> Result<(), TokenError> {
    match claims.token_use.as_deref() {
        Some("access") => Ok(()),
        other => Err(TokenError::Invalid(format!(
            "expected an access token, got token_use {:?}",
            other
        ))),
    }
}

/// HS256 verifier for local development
#[derive(Clone)]
pub struct SecretTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl Debug for SecretTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretTokenVerifier")
            .field("decoding_key", &"[hidden]")
            .field("issuer", &self.validation.iss)
            .finish()
    }
}

impl SecretTokenVerifier {
    pub fn new(secret: &str, issuer: Option<&str>) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: validation_for(Algorithm::HS256, issuer),
        }
    }
}

impl TokenVerifier for SecretTokenVerifier {
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Invalid(e.to_string()))
    }
}

/// RS256 verifier backed by the user pool key set
pub struct JwksTokenVerifier {
    keys: JwkSet,
    validation: Validation,
}

impl Debug for JwksTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kids: Vec<&str> = self
            .keys
            .keys
            .iter()
            .filter_map(|k| k.common.key_id.as_deref())
            .collect();

        f.debug_struct("JwksTokenVerifier")
            .field("key_ids", &kids)
            .field("issuer", &self.validation.iss)
            .finish()
    }
}

impl JwksTokenVerifier {
    pub fn new(keys: JwkSet, issuer: Option<&str>) -> Self {
        Self {
            keys,
            validation: validation_for(Algorithm::RS256, issuer),
        }
    }

    /// Parse a JWKS document
    pub fn from_jwks_json(json: &str, issuer: Option<&str>) -> Result<Self, TokenError> {
        let keys: JwkSet =
            serde_json::from_str(json).map_err(|e| TokenError::KeySet(e.to_string()))?;

        if keys.keys.is_empty() {
            return Err(TokenError::KeySet("JWKS contains no keys".to_string()));
        }

        Ok(Self::new(keys, issuer))
    }

    /// Fetch the key set once; keys are not refreshed afterwards
    pub async fn fetch(
        client: &reqwest::Client,
        url: &str,
        issuer: Option<&str>,
    ) -> Result<Self, TokenError> {
        let response = client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| TokenError::KeySet(format!("GET {}: {}", url, e)))?;

        let body = response
            .text()
            .await
            .map_err(|e| TokenError::KeySet(e.to_string()))?;

        let verifier = Self::from_jwks_json(&body, issuer)?;
        info!(url = %url, key_count = verifier.keys.keys.len(), "Loaded JWKS");

        Ok(verifier)
    }

    pub fn key_count(&self) -> usize {
        self.keys.keys.len()
    }
}

impl TokenVerifier for JwksTokenVerifier {
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let header = decode_header(token).map_err(|e| TokenError::Malformed(e.to_string()))?;

        let kid = header
            .kid
            .ok_or_else(|| TokenError::Malformed("missing 'kid' header".to_string()))?;

        let jwk = self
            .keys
            .find(&kid)
            .ok_or_else(|| TokenError::UnknownKey(kid.clone()))?;

        let decoding_key =
            DecodingKey::from_jwk(jwk).map_err(|e| TokenError::KeySet(e.to_string()))?;

        let claims = decode::<TokenClaims>(token, &decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Invalid(e.to_string()))?;

        require_access_token(&claims)?;

        debug!(kid = %kid, "Verified bearer token");
        Ok(claims)
    }
}
