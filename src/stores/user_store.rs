use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};

use crate::errors::internal::{ConstraintViolation, InternalError};
use crate::stores::map_write_err;
use crate::types::db::user::{self, Entity as User};
use crate::types::dto::user::NewUser;

/// UserStore persists and reads user accounts
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch a single user by id; `None` when no row matches.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<user::Model>, InternalError> {
        User::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_user", e))
    }

    /// Fetch a single user by username; `None` when no row matches.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<user::Model>, InternalError> {
        User::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_username", e))
    }

    /// Insert a new user row, assigning its id and creation timestamp.
    ///
    /// Fields absent from `new_user` are left unset so the database's
    /// not-null constraints decide the outcome; this path applies no schema
    /// validation (see api::users). A duplicate username is rejected with a
    /// `ConstraintViolation` whether it is caught by the pre-check or by the
    /// unique index during the insert itself.
    pub async fn create(&self, new_user: NewUser) -> Result<user::Model, InternalError> {
        if let Some(username) = &new_user.username {
            if self.find_by_username(username).await?.is_some() {
                return Err(ConstraintViolation::Unique { entity: "user" }.into());
            }
        }

        let row = user::ActiveModel {
            id: NotSet,
            username: new_user.username.map_or(NotSet, Set),
            password: new_user.password.map_or(NotSet, Set),
            email: Set(new_user.email),
            created_at: Set(Utc::now().timestamp()),
        };

        row.insert(&self.db)
            .await
            .map_err(|e| map_write_err("user", "create_user", e))
    }
}
