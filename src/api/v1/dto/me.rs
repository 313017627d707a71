/*
 * Responsibility
 * - /me 系の response DTO
 */
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MeResponse {
    pub user_id: Option<String>,
    pub roles: Vec<String>,
    /// Absolute URL of this request as seen by the client (effective scheme + Host).
    #[serde(rename = "self")]
    pub self_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RolesResponse {
    pub roles: Vec<String>,
}
