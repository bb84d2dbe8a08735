//! In-memory feedback thread repository for testing and development.
//!
//! Keeps candidates and threads in process memory. Not suitable for
//! multi-server deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::feedback::{FeedbackThread, FeedbackThreadCollection, ThreadClosure};
use crate::domain::foundation::{CandId, DomainError, FeedbackId};
use crate::ports::FeedbackThreadRepository;

/// Candidate row as far as thread lookup is concerned.
#[derive(Debug, Clone)]
struct CandidateRecord {
    pscid: String,
    active: bool,
}

/// In-memory implementation of `FeedbackThreadRepository`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeedbackThreadRepository {
    candidates: Arc<RwLock<HashMap<CandId, CandidateRecord>>>,
    threads: Arc<RwLock<Vec<FeedbackThread>>>,
}

impl InMemoryFeedbackThreadRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an active candidate.
    pub async fn add_candidate(&self, cand_id: CandId, pscid: impl Into<String>) {
        self.candidates.write().await.insert(
            cand_id,
            CandidateRecord {
                pscid: pscid.into(),
                active: true,
            },
        );
    }

    /// Marks a candidate inactive; its collection can no longer be resolved.
    pub async fn deactivate_candidate(&self, cand_id: CandId) {
        if let Some(record) = self.candidates.write().await.get_mut(&cand_id) {
            record.active = false;
        }
    }

    /// Stores a thread row.
    pub async fn add_thread(&self, thread: FeedbackThread) {
        self.threads.write().await.push(thread);
    }

    /// Returns a copy of a thread row.
    pub async fn thread(&self, feedback_id: FeedbackId) -> Option<FeedbackThread> {
        self.threads
            .read()
            .await
            .iter()
            .find(|t| t.feedback_id == feedback_id)
            .cloned()
    }
}

#[async_trait]
impl FeedbackThreadRepository for InMemoryFeedbackThreadRepository {
    async fn find_collection(
        &self,
        cand_id: &CandId,
        username: &str,
    ) -> Result<Option<FeedbackThreadCollection>, DomainError> {
        let candidates = self.candidates.read().await;
        let record = match candidates.get(cand_id) {
            Some(record) if record.active => record,
            _ => return Ok(None),
        };

        Ok(Some(FeedbackThreadCollection::reconstitute(*cand_id, record.pscid.clone(), username)))
    }

    async fn close_thread(&self, closure: &ThreadClosure) -> Result<u64, DomainError> {
        let mut threads = self.threads.write().await;
        let updated = threads
            .iter_mut()
            .map(|t| t.apply(closure))
            .filter(|updated| *updated)
            .count();
        Ok(updated as u64)
    }
}
