// Database entities - SeaORM models
pub mod alibi;
pub mod emotional_evaluation;
pub mod face_analysis;
pub mod subscription_plan;
pub mod user;
