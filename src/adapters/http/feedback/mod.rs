//! HTTP adapter for feedback endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CloseThreadForm, ErrorResponse, SuccessResponse};
pub use handlers::FeedbackAppState;
pub use routes::{feedback_router, LEGACY_CLOSE_THREAD_PATH};
