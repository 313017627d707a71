/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - 認証 (Bearer) は任意: app.rs 側で access middleware を v1 全体に適用する
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{
    health::health,
    me::{me, my_roles},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/me", get(me))
        .route("/me/roles", get(my_roles))
}
