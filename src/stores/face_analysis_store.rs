use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};

use crate::errors::internal::InternalError;
use crate::stores::map_write_err;
use crate::types::db::face_analysis::{self, Entity as FaceAnalysis};
use crate::types::dto::face_analysis::NewFaceAnalysis;

/// FaceAnalysisStore persists and reads face analysis results
pub struct FaceAnalysisStore {
    db: DatabaseConnection,
}

impl FaceAnalysisStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch a single analysis by id; `None` when no row matches.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<face_analysis::Model>, InternalError> {
        FaceAnalysis::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_face_analysis", e))
    }

    /// List every analysis owned by the given user; empty when none match.
    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<face_analysis::Model>, InternalError> {
        FaceAnalysis::find()
            .filter(face_analysis::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_face_analyses_by_user", e))
    }

    /// Insert a new analysis row, assigning its id and creation timestamp.
    pub async fn create(
        &self,
        new_analysis: NewFaceAnalysis,
    ) -> Result<face_analysis::Model, InternalError> {
        let row = face_analysis::ActiveModel {
            id: NotSet,
            user_id: Set(new_analysis.user_id),
            gender: Set(new_analysis.gender),
            age: Set(new_analysis.age),
            emotion: Set(new_analysis.emotion),
            diagnosis: Set(new_analysis.diagnosis),
            image_hash: Set(new_analysis.image_hash),
            created_at: Set(Utc::now().timestamp()),
        };

        row.insert(&self.db)
            .await
            .map_err(|e| map_write_err("face analysis", "create_face_analysis", e))
    }
}
