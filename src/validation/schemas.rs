//! One explicit insertable schema per entity.
//!
//! Field names are the wire (camelCase) names; order matters - violations
//! are reported in the order fields are declared here.

use super::{FieldRule, FieldType, InsertSchema};

const fn text(name: &'static str, required: bool) -> FieldRule {
    FieldRule {
        name,
        required,
        ty: FieldType::Text,
    }
}

const fn integer(name: &'static str, required: bool) -> FieldRule {
    FieldRule {
        name,
        required,
        ty: FieldType::Integer,
    }
}

const fn json(name: &'static str, required: bool) -> FieldRule {
    FieldRule {
        name,
        required,
        ty: FieldType::Json,
    }
}

/// Insertable schema for user accounts.
///
/// Declared for parity with the other entities, but the user creation
/// endpoint persists its payload without consulting it (see api::users).
pub static USER: InsertSchema = InsertSchema {
    entity: "user",
    fields: &[
        text("username", true),
        text("password", true),
        text("email", false),
    ],
};

pub static ALIBI: InsertSchema = InsertSchema {
    entity: "alibi",
    fields: &[
        integer("userId", false),
        text("recipient", true),
        text("realReason", false),
        text("alibiType", true),
        text("format", true),
        text("content", true),
    ],
};

pub static EMOTIONAL_EVALUATION: InsertSchema = InsertSchema {
    entity: "emotional evaluation",
    fields: &[
        integer("userId", false),
        text("stress", false),
        text("relaxDifficulty", false),
        text("morningFeeling", false),
        text("result", false),
    ],
};

pub static FACE_ANALYSIS: InsertSchema = InsertSchema {
    entity: "face analysis",
    fields: &[
        integer("userId", false),
        text("gender", false),
        integer("age", false),
        text("emotion", false),
        text("diagnosis", false),
        text("imageHash", false),
    ],
};

pub static SUBSCRIPTION_PLAN: InsertSchema = InsertSchema {
    entity: "subscription plan",
    fields: &[
        text("name", true),
        text("description", true),
        integer("price", true),
        json("features", false),
    ],
};
