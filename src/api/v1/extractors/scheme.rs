use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::services::scheme::EffectiveScheme;

/// Falls back to `http` when the forwarded-scheme layer is not installed
/// (e.g. a router exercised on its own in tests).
impl<S> FromRequestParts<S> for EffectiveScheme
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<EffectiveScheme>()
            .cloned()
            .unwrap_or_default())
    }
}
