//! Feedback command handlers.

mod close_thread;

pub use close_thread::{
    CloseFeedbackThreadCommand, CloseFeedbackThreadHandler, CloseFeedbackThreadResult,
};
