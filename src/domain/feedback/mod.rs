//! Feedback domain module.
//!
//! Feedback threads are discussion records attached to a candidate's
//! behavioural data. This module covers resolving a candidate's thread
//! collection and closing a thread within it.

mod collection;
mod errors;
mod thread_status;

pub use collection::{FeedbackThread, FeedbackThreadCollection, ThreadClosure};
pub use errors::FeedbackError;
pub use thread_status::ThreadStatus;
