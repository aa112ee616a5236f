use thiserror::Error;

pub mod constraint;
pub mod database;

pub use constraint::ConstraintViolation;
pub use database::DatabaseError;

/// Internal error type for store operations
///
/// Separates recoverable constraint breaches from infrastructure failures.
/// Not exposed via API - endpoints must convert through errors::api.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }
}
