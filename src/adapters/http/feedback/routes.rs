//! Route configuration for feedback endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{close_feedback_thread, FeedbackAppState};

/// Path the behavioural panel posts to.
pub const LEGACY_CLOSE_THREAD_PATH: &str = "/bvl_feedback/ajax/close_bvl_feedback_thread.php";

/// Creates the feedback router.
///
/// Routes:
/// - `POST /api/feedback/threads/close` - Close a feedback thread
/// - `POST /bvl_feedback/ajax/close_bvl_feedback_thread.php` - Same, at the panel's path
pub fn feedback_router() -> Router<FeedbackAppState> {
    Router::new()
        .route("/api/feedback/threads/close", post(close_feedback_thread))
        .route(LEGACY_CLOSE_THREAD_PATH, post(close_feedback_thread))
}
