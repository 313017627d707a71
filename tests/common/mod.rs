//! Shared helpers for router-level tests: fixture keys, token minting, request plumbing.
#![allow(dead_code)]

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use hip_webservice::{
    app::build_router,
    config::{AuthConfig, Config},
    services::identity::IdentityMode,
    state::AppState,
};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const PUBLIC_PEM: &str = include_str!("../fixtures/ed25519_public.pem");
pub const PRIVATE_PEM: &str = include_str!("../fixtures/ed25519_private.pem");
pub const OTHER_PRIVATE_PEM: &str = include_str!("../fixtures/ed25519_other_private.pem");

pub fn config(mode: IdentityMode) -> Config {
    let mut config = Config {
        auth: AuthConfig {
            access_jwt_public_key_pem: Some(PUBLIC_PEM.to_string()),
            ..AuthConfig::default()
        },
        ..Config::default()
    };
    config.identity.mode = mode;
    config
}

pub fn app(config: &Config) -> Router {
    let state = AppState::from_config(config).unwrap();
    build_router(config, state)
}

pub fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

/// Claims for a HiP user as issued by the identity provider.
pub fn user_claims(sub: &str, roles: &[&str]) -> Value {
    json!({
        "iss": "https://hip.eu.auth0.com/",
        "aud": "https://hip.cs.upb.de/API",
        "exp": now() + 600,
        "https://hip.cs.upb.de/sub": sub,
        "https://hip.cs.upb.de/roles": roles,
    })
}

pub fn sign_with(private_pem: &str, claims: &Value) -> String {
    let key = EncodingKey::from_ed_pem(private_pem.as_bytes()).unwrap();
    jsonwebtoken::encode(&Header::new(Algorithm::EdDSA), claims, &key).unwrap()
}

pub fn sign(claims: &Value) -> String {
    sign_with(PRIVATE_PEM, claims)
}

pub fn get(uri: &str) -> axum::http::request::Builder {
    Request::builder().method("GET").uri(uri)
}

pub async fn send(app: Router, req: axum::http::request::Builder) -> Response<Body> {
    app.oneshot(req.body(Body::empty()).unwrap()).await.unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
