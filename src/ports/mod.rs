//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `FeedbackThreadRepository` - Candidate thread collections and the close mutation
//! - `SessionValidator` - Bearer token validation

mod feedback_thread_repository;
mod session_validator;

pub use feedback_thread_repository::FeedbackThreadRepository;
pub use session_validator::SessionValidator;
