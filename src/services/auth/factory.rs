/// Factory: build the bearer-token verifier from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{AccessTokenError, AccessTokenVerifier, TokenVerifier};

/// `None` when no public key is configured: bearer authentication is then disabled
/// and every request is handled anonymously.
pub fn build_token_verifier(
    config: &Config,
) -> Result<Option<Arc<dyn TokenVerifier>>, AccessTokenError> {
    let Some(pem) = config.auth.access_jwt_public_key_pem.as_deref() else {
        tracing::warn!("ACCESS_JWT_PUBLIC_KEY_PEM not set; bearer authentication disabled");
        return Ok(None);
    };

    let verifier = AccessTokenVerifier::new(
        pem,
        &config.auth.authority,
        &config.auth.audience,
        config.auth.access_token_leeway_seconds,
    )?;

    Ok(Some(Arc::new(verifier)))
}
