/*
 * Responsibility
 * - HTTP に依存しないドメインロジック (identity, scheme, token 検証)
 */
pub mod auth;
pub mod identity;
pub mod scheme;
