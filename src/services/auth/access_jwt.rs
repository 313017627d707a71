use std::fmt;

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::services::identity::Principal;

pub const DEFAULT_AUDIENCE: &str = "https://hip.cs.upb.de/API";
pub const DEFAULT_AUTHORITY: &str = "https://hip.eu.auth0.com/";

// Errors returned by access-token verification.
#[derive(Debug, Error)]
pub enum AccessTokenError {
    #[error("invalid ed25519 public key pem: {0}")]
    InvalidKey(#[source] jsonwebtoken::errors::Error),
    #[error("jwt verification failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Turns a bearer token into the request's `Principal`.
///
/// The access middleware only depends on this trait, so tests and alternative
/// identity providers can plug in their own verifier.
pub trait TokenVerifier: Send + Sync + fmt::Debug {
    fn verify(&self, token: &str) -> Result<Principal, AccessTokenError>;
}

/// EdDSA (Ed25519) access-token verifier.
///
/// Checks signature, `iss` (the authority), `aud` and `exp` (with leeway).
/// Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct AccessTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for AccessTokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AccessTokenVerifier {
    pub fn new(
        public_key_pem: &str,
        authority: &str,
        audience: &str,
        leeway_seconds: u64,
    ) -> Result<Self, AccessTokenError> {
        let decoding_key = DecodingKey::from_ed_pem(public_key_pem.as_bytes())
            .map_err(AccessTokenError::InvalidKey)?;

        let mut validation = Validation::new(Algorithm::EdDSA);
        validation.set_issuer(&[authority]);
        validation.set_audience(&[audience]);
        validation.leeway = leeway_seconds;

        Ok(Self {
            decoding_key,
            validation,
        })
    }
}

impl TokenVerifier for AccessTokenVerifier {
    fn verify(&self, token: &str) -> Result<Principal, AccessTokenError> {
        let data = jsonwebtoken::decode::<Map<String, Value>>(
            token,
            &self.decoding_key,
            &self.validation,
        )?;

        Ok(Principal::from_jwt_claims(data.claims))
    }
}
