/*!
 * Current user extractor
 *
 * Responsibility:
 * - 認証済みリクエストの user id / roles を handler に提供する
 * - 解決ロジックは services::identity、axum 依存は core に閉じ込める
 *
 * Public API:
 * - CurrentUser
 * - UserRoles
 */

mod core;
mod types;

pub use types::{CurrentUser, UserRoles};
