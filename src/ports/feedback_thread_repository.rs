//! Feedback thread repository port.
//!
//! Defines the contract for resolving a candidate's feedback thread
//! collection and applying the close mutation to one of its threads.

use async_trait::async_trait;

use crate::domain::feedback::{FeedbackThreadCollection, ThreadClosure};
use crate::domain::foundation::{CandId, DomainError};

/// Repository port for feedback thread persistence.
///
/// Implementations must ensure:
/// - `close_thread` only updates an active, not yet closed thread whose
///   candidate equals `closure.cand_id`
/// - the returned count is the number of rows actually changed
#[async_trait]
pub trait FeedbackThreadRepository: Send + Sync {
    /// Resolve the thread collection of a candidate for a user.
    ///
    /// Returns `None` if the candidate does not exist or is inactive.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    /// - `CandidateNotFound` is accepted in place of `None`
    async fn find_collection(
        &self,
        cand_id: &CandId,
        username: &str,
    ) -> Result<Option<FeedbackThreadCollection>, DomainError>;

    /// Close the thread targeted by `closure`.
    ///
    /// Returns the number of rows updated; `0` when no thread matched.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn close_thread(&self, closure: &ThreadClosure) -> Result<u64, DomainError>;
}
