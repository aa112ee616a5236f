use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};

use crate::errors::internal::InternalError;
use crate::stores::map_write_err;
use crate::types::db::emotional_evaluation::{self, Entity as EmotionalEvaluation};
use crate::types::dto::emotional_evaluation::NewEmotionalEvaluation;

/// EmotionalEvaluationStore persists and reads self-reported evaluations
pub struct EmotionalEvaluationStore {
    db: DatabaseConnection,
}

impl EmotionalEvaluationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch a single evaluation by id; `None` when no row matches.
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<emotional_evaluation::Model>, InternalError> {
        EmotionalEvaluation::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_emotional_evaluation", e))
    }

    /// List every evaluation owned by the given user; empty when none match.
    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<emotional_evaluation::Model>, InternalError> {
        EmotionalEvaluation::find()
            .filter(emotional_evaluation::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_emotional_evaluations_by_user", e))
    }

    /// Insert a new evaluation row, assigning its id and creation timestamp.
    pub async fn create(
        &self,
        new_evaluation: NewEmotionalEvaluation,
    ) -> Result<emotional_evaluation::Model, InternalError> {
        let row = emotional_evaluation::ActiveModel {
            id: NotSet,
            user_id: Set(new_evaluation.user_id),
            stress: Set(new_evaluation.stress),
            relax_difficulty: Set(new_evaluation.relax_difficulty),
            morning_feeling: Set(new_evaluation.morning_feeling),
            result: Set(new_evaluation.result),
            created_at: Set(Utc::now().timestamp()),
        };

        row.insert(&self.db)
            .await
            .map_err(|e| map_write_err("emotional evaluation", "create_emotional_evaluation", e))
    }
}
