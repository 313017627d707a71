/*
 * Responsibility
 * - handler 向け extractor の公開インターフェース
 */
mod current_user;
mod scheme;

pub use current_user::{CurrentUser, UserRoles};
