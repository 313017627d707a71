/*
 * Responsibility
 * - middleware の公開インターフェース
 * - app.rs での適用順 (外側から): scheme → http → security_headers → auth (/api/v1)
 */
pub mod auth;
pub mod http;
pub mod scheme;
pub mod security_headers;
