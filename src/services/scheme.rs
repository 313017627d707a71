//! Effective request scheme behind a TLS-terminating reverse proxy.
//!
//! The proxy forwards client HTTPS traffic as plain HTTP and reports the
//! client-facing scheme in a header (`X-Forwarded-Proto` by default).
//! The header is trusted as-is: only deploy behind a proxy that always sets
//! (or strips) it.

use std::fmt;

/// Scheme assumed when the request itself does not carry one.
pub const DEFAULT_SCHEME: &str = "http";

pub const DEFAULT_FORWARDED_PROTO_HEADER: &str = "x-forwarded-proto";

/// Decide the scheme used for the rest of request processing.
///
/// A present, non-blank header value wins verbatim; otherwise `original` is kept.
pub fn normalize_scheme(original: &str, forwarded_proto: Option<&str>) -> String {
    match forwarded_proto.filter(|v| !v.trim().is_empty()) {
        Some(proto) => proto.to_string(),
        None => original.to_string(),
    }
}

/// The scheme resolved once per request by the forwarded-scheme middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveScheme(pub String);

impl EffectiveScheme {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_https(&self) -> bool {
        self.0.eq_ignore_ascii_case("https")
    }
}

impl Default for EffectiveScheme {
    fn default() -> Self {
        Self(DEFAULT_SCHEME.to_string())
    }
}

impl fmt::Display for EffectiveScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
