/*
 * Responsibility
 * - Config読み込み → tracing 初期化 → 依存生成 → Router 組み立て
 * - Middleware の適用 (scheme/http/security headers/Bearer)
 * - axum::serve() で起動
 */
use anyhow::Result;
use axum::Router;
use tracing_subscriber::EnvFilter;

use crate::{api, config::Config, middleware, state::AppState};

pub async fn run() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config);

    let state = AppState::from_config(&config)?;
    tracing::info!(
        identity_mode = %state.identity.mode(),
        bearer_auth = state.verifier.is_some(),
        forwarded_proto_header = %config.forwarded_proto_header,
        "configuration loaded"
    );

    let app = build_router(&config, state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!config.app_env.is_production())
        .init();
}

/// Assemble the application router. Layers added later wrap earlier ones, so the
/// forwarded-scheme layer goes on last and runs first.
pub fn build_router(config: &Config, state: AppState) -> Router {
    let v1 = middleware::auth::access::apply(api::v1::routes(), state.clone());

    let router = Router::new().nest("/api/v1", v1).with_state(state);
    let router = middleware::security_headers::apply(router);
    let router = middleware::http::apply(router);
    middleware::scheme::apply(router, config.forwarded_proto_header.clone())
}
