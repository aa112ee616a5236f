// API-facing error types
pub mod artifacts;
pub mod records;

// Re-exports for convenience
pub use artifacts::ArtifactError;
pub use records::RecordError;
