/*
 * Responsibility
 * - claim 集合からの user id / roles 解決
 * - HTTP / axum には依存しない (extractor 側で AppState から呼ぶ)
 */
mod extractor;
mod principal;

pub use extractor::{
    DEFAULT_ROLES_CLAIM, DEFAULT_SUBJECT_CLAIM, IdentityError, IdentityExtractor, IdentityMode,
};
pub use principal::{Claim, Principal};
