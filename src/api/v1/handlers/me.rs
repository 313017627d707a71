/*
 * Responsibility
 * - GET /me: 解決済みの user id / roles と、クライアントから見た自身の絶対 URL
 * - GET /me/roles: roles のみ (strict mode でも 401 にならない)
 */
use axum::{
    Json,
    extract::OriginalUri,
    http::{HeaderMap, Uri, header},
};
use url::Url;

use crate::{
    api::v1::{
        dto::me::{MeResponse, RolesResponse},
        extractors::{CurrentUser, UserRoles},
    },
    error::AppError,
    services::scheme::EffectiveScheme,
};

const FALLBACK_HOST: &str = "localhost";

pub async fn me(
    scheme: EffectiveScheme,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    user: CurrentUser,
) -> Result<Json<MeResponse>, AppError> {
    let host = request_host(&headers, &uri);

    let self_url = absolute_url(&scheme, host, &uri).map_err(|err| {
        tracing::debug!(error = %err, scheme = %scheme, host, "cannot build absolute url");
        AppError::bad_request("INVALID_REQUEST_URL", "cannot build request url")
    })?;

    Ok(Json(MeResponse {
        user_id: user.user_id,
        roles: user.roles,
        self_url: self_url.into(),
    }))
}

pub async fn my_roles(UserRoles(roles): UserRoles) -> Json<RolesResponse> {
    Json(RolesResponse { roles })
}

fn request_host<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> &'a str {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or(FALLBACK_HOST)
}

fn absolute_url(scheme: &EffectiveScheme, host: &str, uri: &Uri) -> Result<Url, url::ParseError> {
    let base = Url::parse(&format!("{scheme}://{host}/"))?;
    base.join(uri.path_and_query().map_or("/", |pq| pq.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_uses_effective_scheme() {
        let uri: Uri = "/api/v1/me?x=1".parse().unwrap();
        let url = absolute_url(&EffectiveScheme("https".into()), "hip.example", &uri).unwrap();
        assert_eq!(url.as_str(), "https://hip.example/api/v1/me?x=1");
    }

    #[test]
    fn host_falls_back_to_localhost() {
        let uri: Uri = "/api/v1/me".parse().unwrap();
        assert_eq!(request_host(&HeaderMap::new(), &uri), "localhost");
    }

    #[test]
    fn garbage_scheme_is_an_error() {
        let uri: Uri = "/".parse().unwrap();
        assert!(absolute_url(&EffectiveScheme("not a scheme".into()), "h", &uri).is_err());
    }
}
