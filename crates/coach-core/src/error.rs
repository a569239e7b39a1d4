//! Error types for the coach library.

use reqwest::StatusCode;
use thiserror::Error;

/// The single message shown to users for every failed plan request.
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Internal classification of a failed plan request.
///
/// Every variant surfaces as [`FAILURE_MESSAGE`] to observers; the variant is
/// kept for logging and diagnostics only.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The request never produced an HTTP response
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered outside the success range
    #[error("Unexpected HTTP status: {0}")]
    Status(StatusCode),
    /// The response body was not a plan
    #[error("Failed to decode plan: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RequestError {
    /// The message shown to users, whatever the cause.
    pub fn user_message(&self) -> &'static str {
        FAILURE_MESSAGE
    }
}

/// Comprehensive error type for coach operations.
#[derive(Error, Debug)]
pub enum CoachError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A plan request failed
    #[error("Plan request failed: {0}")]
    Request(#[from] RequestError),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CoachError {
        CoachError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CoachError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Name of the offending field for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            CoachError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type alias for coach operations
pub type Result<T> = std::result::Result<T, CoachError>;
