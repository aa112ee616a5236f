use poem_openapi::{ApiResponse, Object, payload::Json};
use serde::Deserialize;

use crate::types::db::emotional_evaluation;

/// Typed insert record produced by validating an emotional evaluation payload
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewEmotionalEvaluation {
    pub user_id: Option<i32>,
    pub stress: Option<String>,
    pub relax_difficulty: Option<String>,
    pub morning_feeling: Option<String>,
    pub result: Option<String>,
}

/// Persisted emotional evaluation record as returned to clients
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct EmotionalEvaluationResponse {
    pub id: i32,
    pub user_id: Option<i32>,
    pub stress: Option<String>,
    pub relax_difficulty: Option<String>,
    pub morning_feeling: Option<String>,
    pub result: Option<String>,
    pub created_at: i64,
}

impl From<emotional_evaluation::Model> for EmotionalEvaluationResponse {
    fn from(m: emotional_evaluation::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            stress: m.stress,
            relax_difficulty: m.relax_difficulty,
            morning_feeling: m.morning_feeling,
            result: m.result,
            created_at: m.created_at,
        }
    }
}

#[derive(ApiResponse, Debug)]
pub enum CreateEmotionalEvaluationResponse {
    /// Emotional evaluation persisted
    #[oai(status = 201)]
    Created(Json<EmotionalEvaluationResponse>),
}
