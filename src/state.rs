/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - identity: claim type / strict|tolerant の設定済み IdentityExtractor
 *   - verifier: bearer token 検証 (未設定なら None = 匿名のみ)
 * - Clone 前提で持つ (内部は Arc)
 */
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{AccessTokenError, TokenVerifier, build_token_verifier};
use crate::services::identity::IdentityExtractor;

#[derive(Clone, Debug)]
pub struct AppState {
    pub identity: Arc<IdentityExtractor>,
    pub verifier: Option<Arc<dyn TokenVerifier>>,
}

impl AppState {
    pub fn new(identity: IdentityExtractor, verifier: Option<Arc<dyn TokenVerifier>>) -> Self {
        Self {
            identity: Arc::new(identity),
            verifier,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, AccessTokenError> {
        let verifier = build_token_verifier(config)?;
        Ok(Self::new(config.identity.extractor(), verifier))
    }
}
