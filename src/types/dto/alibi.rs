use poem_openapi::{ApiResponse, Object, payload::Json};
use serde::Deserialize;

use crate::types::db::alibi;

/// Typed insert record produced by validating an alibi payload
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAlibi {
    pub user_id: Option<i32>,
    pub recipient: String,
    pub real_reason: Option<String>,
    pub alibi_type: String,
    pub format: String,
    pub content: String,
}

/// Persisted alibi record as returned to clients
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct AlibiResponse {
    pub id: i32,
    pub user_id: Option<i32>,
    pub recipient: String,
    pub real_reason: Option<String>,
    pub alibi_type: String,
    pub format: String,
    pub content: String,
    pub created_at: i64,
}

impl From<alibi::Model> for AlibiResponse {
    fn from(m: alibi::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            recipient: m.recipient,
            real_reason: m.real_reason,
            alibi_type: m.alibi_type,
            format: m.format,
            content: m.content,
            created_at: m.created_at,
        }
    }
}

#[derive(ApiResponse, Debug)]
pub enum CreateAlibiResponse {
    /// Alibi persisted
    #[oai(status = 201)]
    Created(Json<AlibiResponse>),
}
