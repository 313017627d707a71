use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::identity::Principal;
use crate::state::AppState;

use super::{CurrentUser, UserRoles};

/// access middleware が Principal を extensions に insert 済みである前提。
/// Principal が無い場合の扱いは IdentityExtractor の mode 次第
/// (tolerant: 匿名として通す / strict: 401)
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let principal = parts.extensions.get::<Principal>();

        let user_id = state
            .identity
            .user_id(principal)
            .inspect_err(|err| tracing::debug!(error = %err, "identity lookup rejected"))?
            .map(str::to_owned);

        let roles = state
            .identity
            .user_roles(principal)
            .into_iter()
            .map(str::to_owned)
            .collect();

        Ok(Self { user_id, roles })
    }
}

impl FromRequestParts<AppState> for UserRoles {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let principal = parts.extensions.get::<Principal>();

        Ok(Self(
            state
                .identity
                .user_roles(principal)
                .into_iter()
                .map(str::to_owned)
                .collect(),
        ))
    }
}
