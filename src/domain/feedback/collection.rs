//! Feedback thread collection aggregate.
//!
//! A collection is the set of feedback threads attached to one candidate as
//! seen by one user. It is resolved before any thread mutation; a candidate
//! that cannot be resolved has no collection.
//!
//! # Ownership
//!
//! Closing is always scoped to the collection's candidate. A thread id that
//! belongs to another candidate never matches.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CandId, FeedbackId, Timestamp};

use super::ThreadStatus;

/// Feedback threads of one candidate, resolved for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackThreadCollection {
    /// Candidate the threads are attached to.
    cand_id: CandId,

    /// Site-visible participant code.
    pscid: String,

    /// Login name of the user acting on the collection.
    username: String,
}

impl FeedbackThreadCollection {
    /// Reconstitute a collection from persistence.
    pub fn reconstitute(
        cand_id: CandId,
        pscid: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            cand_id,
            pscid: pscid.into(),
            username: username.into(),
        }
    }

    pub fn pscid(&self) -> &str {
        &self.pscid
    }

    /// Builds the close mutation for a thread in this collection.
    pub fn close_thread(&self, feedback_id: FeedbackId) -> ThreadClosure {
        ThreadClosure {
            feedback_id,
            cand_id: self.cand_id,
            closed_by: self.username.clone(),
            closed_at: Timestamp::now(),
        }
    }
}

/// A pending close of one thread, scoped to its candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadClosure {
    pub feedback_id: FeedbackId,
    pub cand_id: CandId,
    pub closed_by: String,
    pub closed_at: Timestamp,
}

impl ThreadClosure {
    /// Returns true if `thread` is the row this closure may update.
    pub fn matches(&self, thread: &FeedbackThread) -> bool {
        thread.feedback_id == self.feedback_id
            && thread.cand_id == self.cand_id
            && thread.active
            && thread.status.can_transition_to(&ThreadStatus::Closed)
    }
}

/// A single feedback thread row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackThread {
    pub feedback_id: FeedbackId,
    pub cand_id: CandId,
    pub status: ThreadStatus,
    pub active: bool,
    /// Last user to modify the thread.
    pub user_id: String,
    pub updated_at: Timestamp,
}

impl FeedbackThread {
    /// Creates an active, opened thread.
    pub fn opened(feedback_id: FeedbackId, cand_id: CandId, user_id: impl Into<String>) -> Self {
        Self {
            feedback_id,
            cand_id,
            status: ThreadStatus::Opened,
            active: true,
            user_id: user_id.into(),
            updated_at: Timestamp::now(),
        }
    }

    /// Applies a closure. Returns false when the closure does not target this row.
    pub fn apply(&mut self, closure: &ThreadClosure) -> bool {
        if !closure.matches(self) {
            return false;
        }
        self.status = ThreadStatus::Closed;
        self.user_id = closure.closed_by.clone();
        self.updated_at = closure.closed_at;
        true
    }
}
