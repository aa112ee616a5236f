use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::stores::{
    AlibiStore, EmotionalEvaluationStore, FaceAnalysisStore, SubscriptionPlanStore, UserStore,
};

/// Centralized application data following the main-owned stores pattern
///
/// Every store is created once in main.rs over a single shared connection
/// pool and handed to the API structs, keeping the storage gateway an
/// explicit dependency instead of process-global state.
pub struct AppData {
    pub db: DatabaseConnection,
    pub user_store: Arc<UserStore>,
    pub alibi_store: Arc<AlibiStore>,
    pub emotional_evaluation_store: Arc<EmotionalEvaluationStore>,
    pub face_analysis_store: Arc<FaceAnalysisStore>,
    pub subscription_plan_store: Arc<SubscriptionPlanStore>,
}

impl AppData {
    /// Build every store over the shared connection.
    ///
    /// The connection should be established and migrated before calling this.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");
        let user_store = Arc::new(UserStore::new(db.clone()));
        let alibi_store = Arc::new(AlibiStore::new(db.clone()));
        let emotional_evaluation_store = Arc::new(EmotionalEvaluationStore::new(db.clone()));
        let face_analysis_store = Arc::new(FaceAnalysisStore::new(db.clone()));
        let subscription_plan_store = Arc::new(SubscriptionPlanStore::new(db.clone()));
        tracing::debug!("Stores created");

        Self {
            db,
            user_store,
            alibi_store,
            emotional_evaluation_store,
            face_analysis_store,
            subscription_plan_store,
        }
    }
}
