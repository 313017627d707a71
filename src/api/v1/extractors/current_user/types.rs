/*
 * Responsibility
 * - Handler から見える「解決済みの利用者情報」の型
 * - middleware が Principal を extensions に格納し、extractor がここへ変換する
 */

/// User id and roles resolved from the request's principal.
///
/// `user_id` is `None` for anonymous requests in tolerant mode, or when the
/// token carries no subject claim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: Option<String>,
    pub roles: Vec<String>,
}

/// Role claim values only. Never rejects, even in strict mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRoles(pub Vec<String>);

