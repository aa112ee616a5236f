use poem_openapi::{ApiResponse, Object, payload::Json};
use serde::Deserialize;

use crate::types::db::face_analysis;

/// Typed insert record produced by validating a face analysis payload
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewFaceAnalysis {
    pub user_id: Option<i32>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub emotion: Option<String>,
    pub diagnosis: Option<String>,
    pub image_hash: Option<String>,
}

/// Persisted face analysis record as returned to clients
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct FaceAnalysisResponse {
    pub id: i32,
    pub user_id: Option<i32>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub emotion: Option<String>,
    pub diagnosis: Option<String>,
    pub image_hash: Option<String>,
    pub created_at: i64,
}

impl From<face_analysis::Model> for FaceAnalysisResponse {
    fn from(m: face_analysis::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            gender: m.gender,
            age: m.age,
            emotion: m.emotion,
            diagnosis: m.diagnosis,
            image_hash: m.image_hash,
            created_at: m.created_at,
        }
    }
}

#[derive(ApiResponse, Debug)]
pub enum CreateFaceAnalysisResponse {
    /// Face analysis persisted
    #[oai(status = 201)]
    Created(Json<FaceAnalysisResponse>),
}
