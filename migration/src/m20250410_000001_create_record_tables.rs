use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Password)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create alibis table
        manager
            .create_table(
                Table::create()
                    .table(Alibis::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alibis::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Alibis::UserId)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Alibis::Recipient)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alibis::RealReason)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Alibis::AlibiType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alibis::Format)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alibis::Content)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alibis::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alibis_user_id")
                            .from(Alibis::Table, Alibis::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_alibis_user_id")
                    .table(Alibis::Table)
                    .col(Alibis::UserId)
                    .to_owned(),
            )
            .await?;

        // Create emotional_evaluations table
        manager
            .create_table(
                Table::create()
                    .table(EmotionalEvaluations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmotionalEvaluations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EmotionalEvaluations::UserId)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EmotionalEvaluations::Stress)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EmotionalEvaluations::RelaxDifficulty)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EmotionalEvaluations::MorningFeeling)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EmotionalEvaluations::Result)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EmotionalEvaluations::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_emotional_evaluations_user_id")
                            .from(EmotionalEvaluations::Table, EmotionalEvaluations::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_emotional_evaluations_user_id")
                    .table(EmotionalEvaluations::Table)
                    .col(EmotionalEvaluations::UserId)
                    .to_owned(),
            )
            .await?;

        // Create face_analyses table
        manager
            .create_table(
                Table::create()
                    .table(FaceAnalyses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FaceAnalyses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FaceAnalyses::UserId)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FaceAnalyses::Gender)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FaceAnalyses::Age)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FaceAnalyses::Emotion)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FaceAnalyses::Diagnosis)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FaceAnalyses::ImageHash)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FaceAnalyses::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_face_analyses_user_id")
                            .from(FaceAnalyses::Table, FaceAnalyses::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_face_analyses_user_id")
                    .table(FaceAnalyses::Table)
                    .col(FaceAnalyses::UserId)
                    .to_owned(),
            )
            .await?;

        // Create subscription_plans table
        manager
            .create_table(
                Table::create()
                    .table(SubscriptionPlans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubscriptionPlans::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubscriptionPlans::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubscriptionPlans::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubscriptionPlans::Price)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubscriptionPlans::Features)
                            .json()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SubscriptionPlans::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubscriptionPlans::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FaceAnalyses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(EmotionalEvaluations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Alibis::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Password,
    Email,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Alibis {
    Table,
    Id,
    UserId,
    Recipient,
    RealReason,
    AlibiType,
    Format,
    Content,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EmotionalEvaluations {
    Table,
    Id,
    UserId,
    Stress,
    RelaxDifficulty,
    MorningFeeling,
    Result,
    CreatedAt,
}

#[derive(DeriveIden)]
enum FaceAnalyses {
    Table,
    Id,
    UserId,
    Gender,
    Age,
    Emotion,
    Diagnosis,
    ImageHash,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SubscriptionPlans {
    Table,
    Id,
    Name,
    Description,
    Price,
    Features,
    CreatedAt,
}
