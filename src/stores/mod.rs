// Stores layer - data access for the record tables
pub mod alibi_store;
pub mod emotional_evaluation_store;
pub mod face_analysis_store;
pub mod subscription_plan_store;
pub mod user_store;

pub use alibi_store::AlibiStore;
pub use emotional_evaluation_store::EmotionalEvaluationStore;
pub use face_analysis_store::FaceAnalysisStore;
pub use subscription_plan_store::SubscriptionPlanStore;
pub use user_store::UserStore;

use sea_orm::{DbErr, SqlErr};

use crate::errors::internal::{ConstraintViolation, InternalError};

/// Map an insert failure onto the error taxonomy: constraint breaches become
/// recoverable violations, anything else is an infrastructure failure.
pub(crate) fn map_write_err(entity: &'static str, operation: &str, e: DbErr) -> InternalError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ConstraintViolation::Unique { entity }.into()
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            ConstraintViolation::ForeignKey { entity }.into()
        }
        _ => InternalError::database(operation, e),
    }
}
