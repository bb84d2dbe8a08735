//! HTTP DTOs for feedback endpoints.
//!
//! Field names follow the panel's form posts (`candID`, `feedbackID`) and its
//! JSON envelopes (`{"success": true}` / `{"error": "..."}`).

use serde::{Deserialize, Serialize};

use crate::application::handlers::feedback::CloseFeedbackThreadCommand;
use crate::domain::feedback::FeedbackError;
use crate::domain::foundation::{AuthenticatedUser, CandId, FeedbackId};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Form body of a close-thread request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CloseThreadForm {
    #[serde(rename = "candID", default)]
    pub cand_id: Option<String>,
    #[serde(rename = "feedbackID", default)]
    pub feedback_id: Option<String>,
}

impl CloseThreadForm {
    /// Validates the form into a command.
    ///
    /// `candID` is checked before `feedbackID`.
    pub fn into_command(
        self,
        user: AuthenticatedUser,
    ) -> Result<CloseFeedbackThreadCommand, FeedbackError> {
        let cand_id = self
            .cand_id
            .unwrap_or_default()
            .parse::<CandId>()
            .map_err(FeedbackError::InvalidCandId)?;

        let feedback_id = self
            .feedback_id
            .as_deref()
            .map(FeedbackId::coerce)
            .ok_or(FeedbackError::MissingFeedbackId)?;

        Ok(CloseFeedbackThreadCommand {
            cand_id,
            feedback_id,
            user,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of a successful mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Error envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<&FeedbackError> for ErrorResponse {
    fn from(err: &FeedbackError) -> Self {
        match err {
            // Infrastructure detail stays in the logs
            FeedbackError::LookupFailed(_) => {
                Self::new(FeedbackError::CollectionNotFound.to_string())
            }
            other => Self::new(other.to_string()),
        }
    }
}
