//! Feedback-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, FeedbackId, ValidationError};

/// Errors raised while closing a feedback thread.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    /// The candidate identifier was missing or malformed.
    #[error("invalid candID")]
    InvalidCandId(ValidationError),

    /// No feedback identifier was supplied.
    #[error("Missing FeedbackID")]
    MissingFeedbackId,

    /// No collection exists for the candidate.
    #[error("The requested feedback thread can`t be found")]
    CollectionNotFound,

    /// The collection could not be resolved or the mutation failed.
    #[error("Feedback thread lookup failed: {0}")]
    LookupFailed(String),

    /// The close mutation matched no thread.
    #[error("No feedback thread updated")]
    NothingUpdated(FeedbackId),
}

impl From<DomainError> for FeedbackError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::CandidateNotFound => FeedbackError::CollectionNotFound,
            _ => FeedbackError::LookupFailed(err.to_string()),
        }
    }
}
