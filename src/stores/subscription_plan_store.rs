use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set};

use crate::errors::internal::InternalError;
use crate::stores::map_write_err;
use crate::types::db::subscription_plan::{self, Entity as SubscriptionPlan};
use crate::types::dto::subscription_plan::NewSubscriptionPlan;

/// SubscriptionPlanStore persists and reads the plan catalog
pub struct SubscriptionPlanStore {
    db: DatabaseConnection,
}

impl SubscriptionPlanStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch a single plan by id; `None` when no row matches.
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<subscription_plan::Model>, InternalError> {
        SubscriptionPlan::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_subscription_plan", e))
    }

    /// List the whole plan catalog; plans are not owner-scoped.
    pub async fn list_all(&self) -> Result<Vec<subscription_plan::Model>, InternalError> {
        SubscriptionPlan::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_subscription_plans", e))
    }

    /// Insert a new plan row, assigning its id and creation timestamp.
    pub async fn create(
        &self,
        new_plan: NewSubscriptionPlan,
    ) -> Result<subscription_plan::Model, InternalError> {
        let row = subscription_plan::ActiveModel {
            id: NotSet,
            name: Set(new_plan.name),
            description: Set(new_plan.description),
            price: Set(new_plan.price),
            features: Set(new_plan.features),
            created_at: Set(Utc::now().timestamp()),
        };

        row.insert(&self.db)
            .await
            .map_err(|e| map_write_err("subscription plan", "create_subscription_plan", e))
    }
}
