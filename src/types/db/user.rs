use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::alibi::Entity")]
    Alibi,
    #[sea_orm(has_many = "super::emotional_evaluation::Entity")]
    EmotionalEvaluation,
    #[sea_orm(has_many = "super::face_analysis::Entity")]
    FaceAnalysis,
}

impl Related<super::alibi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alibi.def()
    }
}

impl Related<super::emotional_evaluation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmotionalEvaluation.def()
    }
}

impl Related<super::face_analysis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FaceAnalysis.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
