//! CloseFeedbackThreadHandler - Command handler for closing feedback threads.

use std::sync::Arc;

use crate::domain::feedback::{FeedbackError, ThreadClosure};
use crate::domain::foundation::{AuthenticatedUser, CandId, FeedbackId};
use crate::ports::FeedbackThreadRepository;

/// Command to close a feedback thread of a candidate.
#[derive(Debug, Clone)]
pub struct CloseFeedbackThreadCommand {
    pub cand_id: CandId,
    pub feedback_id: FeedbackId,
    pub user: AuthenticatedUser,
}

/// Result of a successful close.
#[derive(Debug, Clone)]
pub struct CloseFeedbackThreadResult {
    pub closure: ThreadClosure,
    pub rows_updated: u64,
}

/// Handler for closing feedback threads.
pub struct CloseFeedbackThreadHandler {
    repository: Arc<dyn FeedbackThreadRepository>,
}

impl CloseFeedbackThreadHandler {
    pub fn new(repository: Arc<dyn FeedbackThreadRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CloseFeedbackThreadCommand,
    ) -> Result<CloseFeedbackThreadResult, FeedbackError> {
        // 1. Resolve the candidate's collection for this user
        let collection = self
            .repository
            .find_collection(&cmd.cand_id, &cmd.user.username)
            .await
            .map_err(|e| {
                tracing::error!(
                    cand_id = %cmd.cand_id,
                    error = %e,
                    "Failed to resolve feedback thread collection"
                );
                FeedbackError::from(e)
            })?
            .ok_or_else(|| {
                tracing::error!(
                    cand_id = %cmd.cand_id,
                    "No feedback thread collection for candidate"
                );
                FeedbackError::CollectionNotFound
            })?;

        // 2. Close, scoped to the collection's candidate
        let closure = collection.close_thread(cmd.feedback_id);
        let rows_updated = self.repository.close_thread(&closure).await.map_err(|e| {
            tracing::error!(
                cand_id = %cmd.cand_id,
                feedback_id = %cmd.feedback_id,
                error = %e,
                "Failed to close feedback thread"
            );
            FeedbackError::LookupFailed(e.to_string())
        })?;

        if rows_updated == 0 {
            tracing::warn!(
                cand_id = %cmd.cand_id,
                pscid = collection.pscid(),
                feedback_id = %cmd.feedback_id,
                "Close matched no feedback thread"
            );
            return Err(FeedbackError::NothingUpdated(cmd.feedback_id));
        }

        tracing::info!(
            cand_id = %cmd.cand_id,
            pscid = collection.pscid(),
            feedback_id = %cmd.feedback_id,
            closed_by = %closure.closed_by,
            "Feedback thread closed"
        );

        Ok(CloseFeedbackThreadResult {
            closure,
            rows_updated,
        })
    }
}
