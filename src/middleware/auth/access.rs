//! Bearer access token 検証 → Principal を extensions に入れる
//!
//! - `Authorization` ヘッダ無し: 匿名のまま次へ (principal なし)
//! - ヘッダ有りで形式不正 / 検証失敗: 401
//! - 検証成功: `Principal` (claim 集合) を request extensions に格納
//!
//! user id / roles の解決は extractor 側 (`CurrentUser`, `UserRoles`) の責務。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// `/api/v1/*` に認証を掛けるための middleware を適用する。
///
/// 例：
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::auth::access::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if !req.headers().contains_key(header::AUTHORIZATION) {
        return Ok(next.run(req).await);
    }

    let Some(verifier) = state.verifier.as_deref() else {
        tracing::warn!("bearer token received but no verifier is configured");
        return Err(AppError::Unauthorized);
    };

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token)
        .ok_or(AppError::Unauthorized)?;

    let principal = match verifier.verify(token) {
        Ok(principal) => principal,
        Err(err) => {
            tracing::warn!(error = %err, "access token verification failed");
            return Err(AppError::Unauthorized);
        }
    };

    tracing::debug!(claims = principal.claims().len(), "access token verified");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
