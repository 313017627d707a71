//! Forwarded-scheme middleware.
//!
//! Must be the outermost layer so that every other middleware and handler sees the
//! corrected scheme (redirects, absolute URLs, HSTS).
//!
//! Responsibility:
//! - Resolve the effective scheme once per request (`services::scheme::normalize_scheme`).
//! - Store it as an `EffectiveScheme` request extension.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderName, Request},
    middleware::{self, Next},
    response::Response,
};

use crate::services::scheme::{DEFAULT_SCHEME, EffectiveScheme, normalize_scheme};

/// Wrap the whole router. Call this last when assembling the app.
pub fn apply(router: Router, header: HeaderName) -> Router {
    router.layer(middleware::from_fn_with_state(header, forwarded_scheme))
}

async fn forwarded_scheme(
    State(header): State<HeaderName>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let scheme = resolve(&req, &header);
    req.extensions_mut().insert(scheme);
    next.run(req).await
}

/// Origin-form request targets carry no scheme; those count as plain `http`.
/// Only the first header value is consulted, and a non-UTF-8 value counts as absent.
pub fn resolve<B>(req: &Request<B>, header: &HeaderName) -> EffectiveScheme {
    let original = req.uri().scheme_str().unwrap_or(DEFAULT_SCHEME);
    let forwarded = req.headers().get(header).and_then(|v| v.to_str().ok());

    let effective = normalize_scheme(original, forwarded);
    if effective != original {
        tracing::debug!(original, effective = %effective, "request scheme overridden by proxy header");
    }

    EffectiveScheme(effective)
}
