use std::sync::Arc;

use poem_openapi::{OpenApi, Tags, param::Path, payload::Json};
use serde_json::Value;

use crate::app_data::AppData;
use crate::errors::api::RecordError;
use crate::stores::AlibiStore;
use crate::types::dto::alibi::{AlibiResponse, CreateAlibiResponse};
use crate::validation::{self, schemas};

/// Alibi record endpoints
pub struct AlibiApi {
    alibi_store: Arc<AlibiStore>,
}

impl AlibiApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            alibi_store: Arc::clone(&app_data.alibi_store),
        }
    }
}

/// API tags for alibi endpoints
#[derive(Tags)]
enum AlibiTags {
    /// Alibi records
    Alibis,
}

#[OpenApi(prefix_path = "/alibis")]
impl AlibiApi {
    /// Validate and persist a new alibi
    #[oai(path = "/", method = "post", tag = "AlibiTags::Alibis")]
    async fn create(&self, body: Json<Value>) -> Result<CreateAlibiResponse, RecordError> {
        let new_alibi =
            validation::parse(&schemas::ALIBI, &body.0).map_err(RecordError::invalid_data)?;

        let alibi = self
            .alibi_store
            .create(new_alibi)
            .await
            .map_err(RecordError::from_internal_error)?;

        Ok(CreateAlibiResponse::Created(Json(alibi.into())))
    }

    /// Fetch an alibi by id
    #[oai(path = "/:id", method = "get", tag = "AlibiTags::Alibis")]
    async fn get(&self, id: Path<String>) -> Result<Json<AlibiResponse>, RecordError> {
        let alibi = match super::parse_id(&id.0) {
            Some(id) => self
                .alibi_store
                .get_by_id(id)
                .await
                .map_err(RecordError::from_internal_error)?,
            None => None,
        };

        alibi
            .map(|m| Json(m.into()))
            .ok_or_else(|| RecordError::not_found("Alibi"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;
    use serde_json::json;

    async fn setup_api() -> AlibiApi {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        AlibiApi::new(Arc::new(AppData::init(db)))
    }

    #[tokio::test]
    async fn test_create_returns_record_with_generated_fields() {
        let api = setup_api().await;

        let result = api
            .create(Json(json!({
                "recipient": "boss",
                "alibiType": "sick",
                "format": "text",
                "content": "I have a fever"
            })))
            .await;

        let CreateAlibiResponse::Created(Json(alibi)) = result.expect("create should succeed");
        assert_eq!(alibi.id, 1);
        assert!(alibi.created_at > 0);
        assert_eq!(alibi.recipient, "boss");
        assert_eq!(alibi.alibi_type, "sick");
        assert_eq!(alibi.format, "text");
        assert_eq!(alibi.content, "I have a fever");
    }

    #[tokio::test]
    async fn test_create_reports_every_missing_field() {
        let api = setup_api().await;

        let result = api.create(Json(json!({ "recipient": "boss" }))).await;

        match result {
            Err(RecordError::InvalidData(Json(body))) => {
                let fields: Vec<&str> =
                    body.details.iter().map(|d| d.field.as_str()).collect();
                assert_eq!(fields, vec!["alibiType", "format", "content"]);
            }
            other => panic!("Expected invalid data, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let api = setup_api().await;

        let result = api.get(Path("9999".to_string())).await;

        assert!(matches!(result, Err(RecordError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_is_not_found() {
        let api = setup_api().await;

        let result = api.get(Path("abc".to_string())).await;

        assert!(matches!(result, Err(RecordError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_created_alibi_can_be_fetched_back() {
        let api = setup_api().await;

        let created = api
            .create(Json(json!({
                "recipient": "landlord",
                "alibiType": "excuse",
                "format": "email",
                "content": "the dog ate it"
            })))
            .await;
        let CreateAlibiResponse::Created(Json(created)) = created.expect("create should succeed");

        let fetched = api
            .get(Path(created.id.to_string()))
            .await
            .expect("fetch should succeed");

        assert_eq!(fetched.0.id, created.id);
        assert_eq!(fetched.0.content, "the dog ate it");
    }
}
