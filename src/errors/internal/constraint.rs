use thiserror::Error;

/// A uniqueness or referential constraint rejected a write.
///
/// The write is all-or-nothing: a rejected insert leaves no partial row.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    #[error("unique constraint violated while writing {entity}")]
    Unique { entity: &'static str },

    #[error("foreign key constraint violated while writing {entity}")]
    ForeignKey { entity: &'static str },
}
