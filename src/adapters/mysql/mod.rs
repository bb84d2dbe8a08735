//! MySQL adapters - Database implementations for repository ports.
//!
//! - `MySqlFeedbackThreadRepository` - Candidate lookup and thread close
//! - `connect` / `run_migrations` - Pool setup used at startup

mod feedback_thread_repository;
mod pool;

pub use feedback_thread_repository::MySqlFeedbackThreadRepository;
pub use pool::{connect, run_migrations};
