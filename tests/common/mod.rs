use alibi_backend::app_data::AppData;
use alibi_backend::types::dto::user::NewUser;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;

/// Create an in-memory database with the full schema and the stores over it.
pub async fn setup_app_data() -> AppData {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    AppData::init(db)
}

/// Create a user and return its id.
pub async fn create_user(app_data: &AppData, username: &str) -> i32 {
    app_data
        .user_store
        .create(NewUser {
            username: Some(username.to_string()),
            password: Some("secret".to_string()),
            email: None,
        })
        .await
        .expect("Failed to create user")
        .id
}
