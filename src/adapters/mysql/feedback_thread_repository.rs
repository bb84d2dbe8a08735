//! MySQL implementation of FeedbackThreadRepository.
//!
//! Reads the `candidate` table to resolve a collection and updates
//! `feedback_bvl_thread` to close a thread.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use crate::domain::feedback::{FeedbackThreadCollection, ThreadClosure, ThreadStatus};
use crate::domain::foundation::{CandId, DomainError};
use crate::ports::FeedbackThreadRepository;

const FIND_COLLECTION_SQL: &str = r#"
    SELECT c.PSCID AS pscid
      FROM candidate c
     WHERE c.CandID = ?
       AND c.Active = 'Y'
"#;

// Scoped by CandID so a thread of another candidate never matches.
const CLOSE_THREAD_SQL: &str = r#"
    UPDATE feedback_bvl_thread
       SET Status = ?,
           UserID = ?,
           Testdate = ?
     WHERE FeedbackID = ?
       AND CandID = ?
       AND Active = 'Y'
       AND Status <> 'closed'
"#;

/// MySQL implementation of FeedbackThreadRepository.
#[derive(Clone)]
pub struct MySqlFeedbackThreadRepository {
    pool: MySqlPool,
}

impl MySqlFeedbackThreadRepository {
    /// Creates a new MySqlFeedbackThreadRepository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackThreadRepository for MySqlFeedbackThreadRepository {
    async fn find_collection(
        &self,
        cand_id: &CandId,
        username: &str,
    ) -> Result<Option<FeedbackThreadCollection>, DomainError> {
        let row = sqlx::query(FIND_COLLECTION_SQL)
            .bind(cand_id.as_u32())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch candidate", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let pscid: String = row
            .try_get("pscid")
            .map_err(|e| DomainError::database("Failed to decode PSCID", e))?;
        Ok(Some(FeedbackThreadCollection::reconstitute(*cand_id, pscid, username)))
    }

    async fn close_thread(&self, closure: &ThreadClosure) -> Result<u64, DomainError> {
        let result = sqlx::query(CLOSE_THREAD_SQL)
            .bind(ThreadStatus::Closed.as_str())
            .bind(&closure.closed_by)
            .bind(*closure.closed_at.as_datetime())
            .bind(closure.feedback_id.as_i64())
            .bind(closure.cand_id.as_u32())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to close feedback thread", e))?;

        Ok(result.rows_affected())
    }
}
