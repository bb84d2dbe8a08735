//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod feedback;

pub use feedback::{
    CloseFeedbackThreadCommand, CloseFeedbackThreadHandler, CloseFeedbackThreadResult,
};
