//! Security-related response headers for browser clients.
//!
//! Applied at the Router level, inside the forwarded-scheme layer.
//! Headers already set by a handler are left untouched.
//!
//! Responsibility:
//! - Clickjacking protection
//! - MIME sniffing protection
//! - Referrer leakage control
//! - Browser feature restrictions
//! - HSTS, only when the client-facing scheme is https (`EffectiveScheme`)

use axum::{
    Router,
    body::Body,
    http::{
        Request,
        header::{self, HeaderName, HeaderValue},
    },
    middleware::{self, Next},
    response::Response,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::services::scheme::EffectiveScheme;

const HSTS: &str = "max-age=31536000; includeSubDomains";

pub fn apply(router: Router) -> Router {
    router
        // Behind a TLS-terminating proxy, https is only known from the effective scheme.
        .layer(middleware::from_fn(strict_transport_security))
        // Clickjacking protection (legacy + modern)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("frame-ancestors 'none'"),
        ))
        // Prevent MIME sniffing
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("permissions-policy"),
            HeaderValue::from_static("camera=(), microphone=(), geolocation=()"),
        ))
}

async fn strict_transport_security(req: Request<Body>, next: Next) -> Response {
    let https = req
        .extensions()
        .get::<EffectiveScheme>()
        .is_some_and(EffectiveScheme::is_https);

    let mut response = next.run(req).await;
    if https {
        response
            .headers_mut()
            .entry(header::STRICT_TRANSPORT_SECURITY)
            .or_insert(HeaderValue::from_static(HSTS));
    }
    response
}
