use std::sync::Arc;

use poem_openapi::{OpenApi, Tags, param::Path, payload::Json};
use serde_json::Value;

use crate::app_data::AppData;
use crate::errors::api::RecordError;
use crate::stores::EmotionalEvaluationStore;
use crate::types::dto::emotional_evaluation::{
    CreateEmotionalEvaluationResponse, EmotionalEvaluationResponse,
};
use crate::validation::{self, schemas};

/// Emotional evaluation record endpoints
pub struct EmotionalEvaluationApi {
    evaluation_store: Arc<EmotionalEvaluationStore>,
}

impl EmotionalEvaluationApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            evaluation_store: Arc::clone(&app_data.emotional_evaluation_store),
        }
    }
}

/// API tags for emotional evaluation endpoints
#[derive(Tags)]
enum EvaluationTags {
    /// Emotional evaluation records
    EmotionalEvaluations,
}

#[OpenApi(prefix_path = "/emotional-evaluations")]
impl EmotionalEvaluationApi {
    /// Validate and persist a new emotional evaluation
    #[oai(
        path = "/",
        method = "post",
        tag = "EvaluationTags::EmotionalEvaluations"
    )]
    async fn create(
        &self,
        body: Json<Value>,
    ) -> Result<CreateEmotionalEvaluationResponse, RecordError> {
        let new_evaluation = validation::parse(&schemas::EMOTIONAL_EVALUATION, &body.0)
            .map_err(RecordError::invalid_data)?;

        let evaluation = self
            .evaluation_store
            .create(new_evaluation)
            .await
            .map_err(RecordError::from_internal_error)?;

        Ok(CreateEmotionalEvaluationResponse::Created(Json(
            evaluation.into(),
        )))
    }

    /// Fetch an emotional evaluation by id
    #[oai(
        path = "/:id",
        method = "get",
        tag = "EvaluationTags::EmotionalEvaluations"
    )]
    async fn get(
        &self,
        id: Path<String>,
    ) -> Result<Json<EmotionalEvaluationResponse>, RecordError> {
        let evaluation = match super::parse_id(&id.0) {
            Some(id) => self
                .evaluation_store
                .get_by_id(id)
                .await
                .map_err(RecordError::from_internal_error)?,
            None => None,
        };

        evaluation
            .map(|m| Json(m.into()))
            .ok_or_else(|| RecordError::not_found("Emotional evaluation"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;
    use serde_json::json;

    async fn setup_api() -> EmotionalEvaluationApi {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        EmotionalEvaluationApi::new(Arc::new(AppData::init(db)))
    }

    #[tokio::test]
    async fn test_all_fields_optional_empty_object_is_valid() {
        let api = setup_api().await;

        let result = api.create(Json(json!({}))).await;

        let CreateEmotionalEvaluationResponse::Created(Json(evaluation)) =
            result.expect("create should succeed");
        assert_eq!(evaluation.stress, None);
        assert_eq!(evaluation.result, None);
    }

    #[tokio::test]
    async fn test_create_then_fetch_round_trips() {
        let api = setup_api().await;

        let created = api
            .create(Json(json!({
                "stress": "high",
                "relaxDifficulty": "often",
                "morningFeeling": "tired",
                "result": "burnout risk"
            })))
            .await;
        let CreateEmotionalEvaluationResponse::Created(Json(created)) =
            created.expect("create should succeed");

        let fetched = api
            .get(Path(created.id.to_string()))
            .await
            .expect("fetch should succeed");

        assert_eq!(fetched.0.stress, Some("high".to_string()));
        assert_eq!(fetched.0.relax_difficulty, Some("often".to_string()));
        assert_eq!(fetched.0.morning_feeling, Some("tired".to_string()));
        assert_eq!(fetched.0.result, Some("burnout risk".to_string()));
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_is_not_found() {
        let api = setup_api().await;

        let result = api.get(Path("abc".to_string())).await;

        assert!(matches!(result, Err(RecordError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_wrong_typed_field_is_rejected() {
        let api = setup_api().await;

        let result = api.create(Json(json!({ "stress": 5 }))).await;

        match result {
            Err(RecordError::InvalidData(Json(body))) => {
                assert_eq!(body.details.len(), 1);
                assert_eq!(body.details[0].field, "stress");
            }
            other => panic!("Expected invalid data, got {other:?}"),
        }
    }
}
