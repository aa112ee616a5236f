use poem_openapi::{ApiResponse, Object, payload::Json};
use serde::Deserialize;
use serde_json::Value;

use crate::types::db::user;

/// Fields a caller may supply when creating a user account.
///
/// Every field is optional at the type level: the user creation endpoint
/// persists its payload without consulting the insertable schema, so a
/// missing required column is only caught by the database's not-null
/// constraint (see api::users).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NewUser {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

impl NewUser {
    /// Pull the user fields out of an arbitrary payload, keeping whatever is
    /// present and ignoring everything else.
    pub fn from_raw(value: &Value) -> Self {
        Self {
            username: value.get("username").and_then(Value::as_str).map(str::to_owned),
            password: value.get("password").and_then(Value::as_str).map(str::to_owned),
            email: value.get("email").and_then(Value::as_str).map(str::to_owned),
        }
    }
}

/// Persisted user record as returned to clients
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub created_at: i64,
}

impl From<user::Model> for UserResponse {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            password: m.password,
            email: m.email,
            created_at: m.created_at,
        }
    }
}

#[derive(ApiResponse, Debug)]
pub enum CreateUserResponse {
    /// User persisted
    #[oai(status = 201)]
    Created(Json<UserResponse>),
}
