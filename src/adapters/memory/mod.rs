//! In-memory adapters for testing and local development.

mod feedback_thread_repository;

pub use feedback_thread_repository::InMemoryFeedbackThreadRepository;
