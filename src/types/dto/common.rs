use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Standardized error response model
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error type or category
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// One field-level problem reported by the validation pipeline
#[derive(Object, Debug)]
pub struct FieldViolationDetail {
    /// Name of the offending field
    pub field: String,

    /// The constraint the field was expected to satisfy
    pub expected: String,

    /// Human-readable error message
    pub message: String,
}

/// Error response carrying the complete list of field violations
#[derive(Object, Debug)]
pub struct ValidationErrorResponse {
    /// Error type or category
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,

    /// Every rejected field, in schema order
    pub details: Vec<FieldViolationDetail>,
}
