//! HTTP handlers for feedback endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::feedback::CloseFeedbackThreadHandler;
use crate::domain::feedback::FeedbackError;
use crate::ports::FeedbackThreadRepository;

use super::dto::{CloseThreadForm, ErrorResponse, SuccessResponse};

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Dependencies of the feedback endpoints.
#[derive(Clone)]
pub struct FeedbackAppState {
    pub repository: Arc<dyn FeedbackThreadRepository>,
}

impl FeedbackAppState {
    pub fn new(repository: Arc<dyn FeedbackThreadRepository>) -> Self {
        Self { repository }
    }

    pub fn close_thread_handler(&self) -> CloseFeedbackThreadHandler {
        CloseFeedbackThreadHandler::new(self.repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/feedback/threads/close - Close a candidate's feedback thread
///
/// A missing or non-form body is treated as an empty form.
pub async fn close_feedback_thread(
    State(state): State<FeedbackAppState>,
    RequireAuth(user): RequireAuth,
    form: Option<Form<CloseThreadForm>>,
) -> Response {
    let form = form.map(|Form(form)| form).unwrap_or_default();

    let cmd = match form.into_command(user) {
        Ok(cmd) => cmd,
        Err(e) => return handle_feedback_error(e),
    };

    match state.close_thread_handler().handle(cmd).await {
        Ok(_) => (StatusCode::OK, Json(SuccessResponse::ok())).into_response(),
        Err(e) => handle_feedback_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_feedback_error(error: FeedbackError) -> Response {
    let status = match &error {
        FeedbackError::InvalidCandId(_) | FeedbackError::MissingFeedbackId => {
            StatusCode::BAD_REQUEST
        }
        FeedbackError::CollectionNotFound | FeedbackError::LookupFailed(_) => {
            StatusCode::NOT_FOUND
        }
        FeedbackError::NothingUpdated(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(ErrorResponse::from(&error))).into_response()
}
