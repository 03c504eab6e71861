/// Structured error types for trivia-core.
///
/// Two layers: [`StoreError`] is what a [`crate::QuestionStore`] reports,
/// [`ServiceError`] is what the [`crate::QueryService`] hands to the HTTP
/// layer. Store errors never cross the service boundary as-is.
use thiserror::Error;

use crate::models::ValidationError;

/// Failure reported by a question store backend
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store refused the write (constraint violation, unknown category)
    #[error("store rejected {operation}: {reason}")]
    Rejected {
        operation: &'static str,
        reason: String,
    },

    /// The backend itself failed (connection lost, query error)
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create a rejection error
    pub fn rejected(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::Rejected {
            operation,
            reason: reason.into(),
        }
    }

    /// Create a backend error
    pub fn backend(reason: impl Into<String>) -> Self {
        Self::Backend(reason.into())
    }
}

/// Error kinds surfaced by the query service.
///
/// Quiz exhaustion is not listed here: it is a successful
/// [`crate::QuizOutcome::Exhausted`], not a failure.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Requested resource does not exist
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    /// Request is missing required input or is malformed
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),

    /// Request is well-formed but cannot be carried out
    #[error("unprocessable: {reason}")]
    Unprocessable { reason: String },
}

/// Result type alias for query service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
    /// Create a not-found error
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Create an unprocessable error
    pub fn unprocessable(reason: impl Into<String>) -> Self {
        Self::Unprocessable {
            reason: reason.into(),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Rejected { operation, reason } => {
                tracing::warn!(operation, %reason, "store rejected operation");
                Self::Unprocessable {
                    reason: format!("{operation} rejected: {reason}"),
                }
            }
            StoreError::Backend(reason) => {
                tracing::error!(%reason, "question store failure");
                Self::Unprocessable {
                    reason: "the question store could not complete the request".to_string(),
                }
            }
        }
    }
}
