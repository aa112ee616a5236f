use poem_openapi::{ApiResponse, payload::Json};

use crate::types::dto::common::ErrorResponse;

/// Error surface for the file-sink endpoints
#[derive(ApiResponse, Debug)]
pub enum ArtifactError {
    /// A required field is missing from the request
    #[oai(status = 400)]
    MissingField(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ArtifactError {
    pub fn missing_field(message: &str) -> Self {
        ArtifactError::MissingField(Json(ErrorResponse {
            error: "missing_field".to_string(),
            message: message.to_string(),
            status_code: 400,
        }))
    }

    /// Log the failure and return a generic 500
    pub fn internal_error(operation: &str, err: impl std::fmt::Display) -> Self {
        tracing::error!("Artifact error in {}: {}", operation, err);
        ArtifactError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "Failed to process the request".to_string(),
            status_code: 500,
        }))
    }
}
