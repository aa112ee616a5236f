use poem_openapi::{ApiResponse, payload::Json};

use crate::errors::internal::{ConstraintViolation, InternalError};
use crate::types::dto::common::{ErrorResponse, FieldViolationDetail, ValidationErrorResponse};
use crate::validation::ValidationError;

/// Error surface shared by the record endpoints
#[derive(ApiResponse, Debug)]
pub enum RecordError {
    /// Payload failed the insertable-schema validation
    #[oai(status = 400)]
    InvalidData(Json<ValidationErrorResponse>),

    /// No record matches the requested id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// A database constraint rejected the write
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl RecordError {
    /// Create an InvalidData error carrying the complete violation list
    pub fn invalid_data(err: ValidationError) -> Self {
        RecordError::InvalidData(Json(ValidationErrorResponse {
            error: "invalid_data".to_string(),
            message: "Invalid data format".to_string(),
            status_code: 400,
            details: err
                .violations
                .into_iter()
                .map(|v| FieldViolationDetail {
                    field: v.field,
                    expected: v.expected,
                    message: v.message,
                })
                .collect(),
        }))
    }

    /// Create a NotFound error for the named record kind
    pub fn not_found(what: &str) -> Self {
        RecordError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: format!("{what} not found"),
            status_code: 404,
        }))
    }

    /// Create a generic Conflict error
    ///
    /// The violated constraint is logged, never returned to the client.
    fn conflict() -> Self {
        RecordError::Conflict(Json(ErrorResponse {
            error: "constraint_violation".to_string(),
            message: "The record conflicts with existing data".to_string(),
            status_code: 409,
        }))
    }

    /// Create a generic internal server error
    ///
    /// Always returns a generic message without exposing internal details.
    fn internal_server_error() -> Self {
        RecordError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Convert InternalError to RecordError
    ///
    /// This is the explicit conversion point from internal errors to API
    /// errors. Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Constraint(ConstraintViolation::Unique { entity }) => {
                tracing::warn!("Unique constraint rejected a {} write", entity);
                Self::conflict()
            }
            InternalError::Constraint(ConstraintViolation::ForeignKey { entity }) => {
                tracing::warn!("Foreign key constraint rejected a {} write", entity);
                Self::conflict()
            }
            InternalError::Database(_) => {
                tracing::error!("Database failure: {}", err);
                Self::internal_server_error()
            }
        }
    }
}
