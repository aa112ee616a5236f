use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};

use crate::errors::internal::InternalError;
use crate::stores::map_write_err;
use crate::types::db::alibi::{self, Entity as Alibi};
use crate::types::dto::alibi::NewAlibi;

/// AlibiStore persists and reads generated alibi messages
pub struct AlibiStore {
    db: DatabaseConnection,
}

impl AlibiStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch a single alibi by id; `None` when no row matches.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<alibi::Model>, InternalError> {
        Alibi::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_alibi", e))
    }

    /// List every alibi owned by the given user; empty when none match.
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<alibi::Model>, InternalError> {
        Alibi::find()
            .filter(alibi::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_alibis_by_user", e))
    }

    /// Insert a new alibi row, assigning its id and creation timestamp.
    pub async fn create(&self, new_alibi: NewAlibi) -> Result<alibi::Model, InternalError> {
        let row = alibi::ActiveModel {
            id: NotSet,
            user_id: Set(new_alibi.user_id),
            recipient: Set(new_alibi.recipient),
            real_reason: Set(new_alibi.real_reason),
            alibi_type: Set(new_alibi.alibi_type),
            format: Set(new_alibi.format),
            content: Set(new_alibi.content),
            created_at: Set(Utc::now().timestamp()),
        };

        row.insert(&self.db)
            .await
            .map_err(|e| map_write_err("alibi", "create_alibi", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::internal::ConstraintViolation;
    use crate::stores::UserStore;
    use crate::types::dto::user::NewUser;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{Database, DatabaseConnection};

    async fn setup_test_db() -> (DatabaseConnection, AlibiStore) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let store = AlibiStore::new(db.clone());
        (db, store)
    }

    fn sick_note(user_id: Option<i32>) -> NewAlibi {
        NewAlibi {
            user_id,
            recipient: "boss".to_string(),
            real_reason: Some("overslept".to_string()),
            alibi_type: "sick".to_string(),
            format: "text".to_string(),
            content: "I have a fever".to_string(),
        }
    }

    async fn create_user(db: &DatabaseConnection, username: &str) -> i32 {
        let user_store = UserStore::new(db.clone());
        user_store
            .create(NewUser {
                username: Some(username.to_string()),
                password: Some("secret".to_string()),
                email: None,
            })
            .await
            .expect("Failed to create user")
            .id
    }

    #[tokio::test]
    async fn test_create_round_trips_every_submitted_field() {
        let (_db, store) = setup_test_db().await;

        let created = store
            .create(sick_note(None))
            .await
            .expect("Failed to create alibi");

        assert!(created.id >= 1);
        assert!(created.created_at > 0);

        let fetched = store
            .get_by_id(created.id)
            .await
            .expect("Failed to query alibi")
            .expect("Alibi not found");

        assert_eq!(fetched, created);
        assert_eq!(fetched.recipient, "boss");
        assert_eq!(fetched.real_reason, Some("overslept".to_string()));
        assert_eq!(fetched.alibi_type, "sick");
        assert_eq!(fetched.format, "text");
        assert_eq!(fetched.content, "I have a fever");
    }

    #[tokio::test]
    async fn test_get_by_id_returns_none_for_unknown_id() {
        let (_db, store) = setup_test_db().await;

        let fetched = store.get_by_id(9999).await.expect("Failed to query alibi");

        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_list_by_user_only_returns_that_users_alibis() {
        let (db, store) = setup_test_db().await;

        let user1 = create_user(&db, "user1").await;
        let user2 = create_user(&db, "user2").await;

        store
            .create(sick_note(Some(user1)))
            .await
            .expect("Failed to create alibi for user1");
        store
            .create(sick_note(Some(user1)))
            .await
            .expect("Failed to create alibi for user1");
        store
            .create(sick_note(Some(user2)))
            .await
            .expect("Failed to create alibi for user2");

        let listed = store
            .list_by_user(user1)
            .await
            .expect("Failed to list alibis");

        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|a| a.user_id == Some(user1)));
    }

    #[tokio::test]
    async fn test_list_by_user_is_empty_when_nothing_matches() {
        let (db, store) = setup_test_db().await;

        let user = create_user(&db, "loner").await;

        let listed = store
            .list_by_user(user)
            .await
            .expect("Failed to list alibis");

        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user_id_is_a_foreign_key_violation() {
        let (_db, store) = setup_test_db().await;

        let result = store.create(sick_note(Some(4242))).await;

        match result {
            Err(InternalError::Constraint(ConstraintViolation::ForeignKey { entity })) => {
                assert_eq!(entity, "alibi");
            }
            other => panic!("Expected foreign key violation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_ids_are_assigned_monotonically() {
        let (_db, store) = setup_test_db().await;

        let first = store
            .create(sick_note(None))
            .await
            .expect("Failed to create alibi");
        let second = store
            .create(sick_note(None))
            .await
            .expect("Failed to create alibi");

        assert!(second.id > first.id);
    }
}
