/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, Auth 設定, claim type, forwarded header など)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use axum::http::HeaderName;

use crate::services::auth::access_jwt::{DEFAULT_AUDIENCE, DEFAULT_AUTHORITY};
use crate::services::identity::{
    DEFAULT_ROLES_CLAIM, DEFAULT_SUBJECT_CLAIM, IdentityExtractor, IdentityMode,
};
use crate::services::scheme::DEFAULT_FORWARDED_PROTO_HEADER;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Bearer-token settings. `authority` is the expected `iss`.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub audience: String,
    pub authority: String,
    pub access_token_leeway_seconds: u64,
    pub access_jwt_public_key_pem: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            audience: DEFAULT_AUDIENCE.to_string(),
            authority: DEFAULT_AUTHORITY.to_string(),
            access_token_leeway_seconds: 60,
            access_jwt_public_key_pem: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub subject_claim: String,
    pub roles_claim: String,
    pub mode: IdentityMode,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            subject_claim: DEFAULT_SUBJECT_CLAIM.to_string(),
            roles_claim: DEFAULT_ROLES_CLAIM.to_string(),
            mode: IdentityMode::default(),
        }
    }
}

impl IdentityConfig {
    pub fn extractor(&self) -> IdentityExtractor {
        IdentityExtractor::new(&self.subject_claim, &self.roles_claim, self.mode)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub auth: AuthConfig,
    pub identity: IdentityConfig,
    pub forwarded_proto_header: HeaderName,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            app_env: AppEnv::default(),
            auth: AuthConfig::default(),
            identity: IdentityConfig::default(),
            forwarded_proto_header: HeaderName::from_static(DEFAULT_FORWARDED_PROTO_HEADER),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let port: u16 = match std::env::var("PORT") {
            Ok(v) => v.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => defaults.addr.port(),
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let access_token_leeway_seconds = match std::env::var("ACCESS_TOKEN_LEEWAY_SECONDS") {
            Ok(v) => v
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("ACCESS_TOKEN_LEEWAY_SECONDS"))?,
            Err(_) => defaults.auth.access_token_leeway_seconds,
        };

        let access_jwt_public_key_pem = std::env::var("ACCESS_JWT_PUBLIC_KEY_PEM")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.replace("\\n", "\n"));

        let auth = AuthConfig {
            audience: non_empty_var("AUTH_AUDIENCE")?.unwrap_or(defaults.auth.audience),
            authority: non_empty_var("AUTH_AUTHORITY")?.unwrap_or(defaults.auth.authority),
            access_token_leeway_seconds,
            access_jwt_public_key_pem,
        };

        let mode = match std::env::var("IDENTITY_MODE") {
            Ok(v) => v
                .parse::<IdentityMode>()
                .map_err(|_| ConfigError::Invalid("IDENTITY_MODE"))?,
            Err(_) => defaults.identity.mode,
        };

        let identity = IdentityConfig {
            subject_claim: non_empty_var("IDENTITY_SUBJECT_CLAIM")?
                .unwrap_or(defaults.identity.subject_claim),
            roles_claim: non_empty_var("IDENTITY_ROLES_CLAIM")?
                .unwrap_or(defaults.identity.roles_claim),
            mode,
        };

        let forwarded_proto_header = match non_empty_var("FORWARDED_PROTO_HEADER")? {
            Some(v) => HeaderName::from_bytes(v.trim().as_bytes())
                .map_err(|_| ConfigError::Invalid("FORWARDED_PROTO_HEADER"))?,
            None => defaults.forwarded_proto_header,
        };

        Ok(Self {
            addr,
            app_env,
            auth,
            identity,
            forwarded_proto_header,
        })
    }
}

// Unset -> None, set but blank -> Invalid.
fn non_empty_var(key: &'static str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if v.trim().is_empty() => Err(ConfigError::Invalid(key)),
        Ok(v) => Ok(Some(v)),
        Err(_) => Ok(None),
    }
}
