use std::sync::Arc;

use poem_openapi::{OpenApi, Tags, payload::Json};
use serde_json::Value;

use crate::app_data::AppData;
use crate::errors::api::RecordError;
use crate::stores::UserStore;
use crate::types::dto::user::{CreateUserResponse, NewUser};

/// User account endpoints
pub struct UserApi {
    user_store: Arc<UserStore>,
}

impl UserApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            user_store: Arc::clone(&app_data.user_store),
        }
    }
}

/// API tags for user endpoints
#[derive(Tags)]
enum UserTags {
    /// User accounts
    Users,
}

#[OpenApi(prefix_path = "/users")]
impl UserApi {
    /// Persist a user account
    ///
    /// Unlike the other record endpoints this one applies no schema
    /// validation: the payload fields are taken as-is and the database
    /// constraints decide the outcome.
    #[oai(path = "/", method = "post", tag = "UserTags::Users")]
    async fn create(&self, body: Json<Value>) -> Result<CreateUserResponse, RecordError> {
        let new_user = NewUser::from_raw(&body.0);

        let user = self
            .user_store
            .create(new_user)
            .await
            .map_err(RecordError::from_internal_error)?;

        Ok(CreateUserResponse::Created(Json(user.into())))
    }
}
