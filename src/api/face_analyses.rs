use std::sync::Arc;

use poem_openapi::{OpenApi, Tags, param::Path, payload::Json};
use serde_json::Value;

use crate::app_data::AppData;
use crate::errors::api::RecordError;
use crate::stores::FaceAnalysisStore;
use crate::types::dto::face_analysis::{CreateFaceAnalysisResponse, FaceAnalysisResponse};
use crate::validation::{self, schemas};

/// Face analysis record endpoints
pub struct FaceAnalysisApi {
    analysis_store: Arc<FaceAnalysisStore>,
}

impl FaceAnalysisApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            analysis_store: Arc::clone(&app_data.face_analysis_store),
        }
    }
}

/// API tags for face analysis endpoints
#[derive(Tags)]
enum AnalysisTags {
    /// Face analysis records
    FaceAnalyses,
}

#[OpenApi(prefix_path = "/face-analyses")]
impl FaceAnalysisApi {
    /// Validate and persist a new face analysis
    #[oai(path = "/", method = "post", tag = "AnalysisTags::FaceAnalyses")]
    async fn create(&self, body: Json<Value>) -> Result<CreateFaceAnalysisResponse, RecordError> {
        let new_analysis = validation::parse(&schemas::FACE_ANALYSIS, &body.0)
            .map_err(RecordError::invalid_data)?;

        let analysis = self
            .analysis_store
            .create(new_analysis)
            .await
            .map_err(RecordError::from_internal_error)?;

        Ok(CreateFaceAnalysisResponse::Created(Json(analysis.into())))
    }

    /// Fetch a face analysis by id
    #[oai(path = "/:id", method = "get", tag = "AnalysisTags::FaceAnalyses")]
    async fn get(&self, id: Path<String>) -> Result<Json<FaceAnalysisResponse>, RecordError> {
        let analysis = match super::parse_id(&id.0) {
            Some(id) => self
                .analysis_store
                .get_by_id(id)
                .await
                .map_err(RecordError::from_internal_error)?,
            None => None,
        };

        analysis
            .map(|m| Json(m.into()))
            .ok_or_else(|| RecordError::not_found("Face analysis"))
    }
}
