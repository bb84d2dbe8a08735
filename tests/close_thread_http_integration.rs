//! Integration tests for the close feedback thread endpoint.
//!
//! These tests drive the full router (auth middleware, form extraction,
//! handler, in-memory repository) through `tower::ServiceExt::oneshot` and
//! verify:
//! 1. Validation failures map to 400 envelopes
//! 2. Lookup failures map to the 404 envelope
//! 3. Zero affected rows map to the 500 envelope
//! 4. A successful close returns `{"success":true}` and mutates the row

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use bvl_feedback::adapters::http::feedback::LEGACY_CLOSE_THREAD_PATH;
use bvl_feedback::adapters::http::{app_router, AuthState, FeedbackAppState};
use bvl_feedback::adapters::{InMemoryFeedbackThreadRepository, MockSessionValidator};
use bvl_feedback::domain::feedback::{
    FeedbackThread, FeedbackThreadCollection, ThreadClosure, ThreadStatus,
};
use bvl_feedback::domain::foundation::{CandId, DomainError, FeedbackId};
use bvl_feedback::ports::FeedbackThreadRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

const TOKEN: &str = "valid-token";
const CLOSE_PATH: &str = "/api/feedback/threads/close";

fn cand(n: u32) -> CandId {
    CandId::new(n).unwrap()
}

fn validator() -> AuthState {
    Arc::new(MockSessionValidator::new().with_test_user(TOKEN, "jdoe"))
}

async fn seeded_repository() -> InMemoryFeedbackThreadRepository {
    let repo = InMemoryFeedbackThreadRepository::new();
    repo.add_candidate(cand(300001), "MTL0001").await;
    repo.add_candidate(cand(400002), "DCC0002").await;
    repo.add_thread(FeedbackThread::opened(FeedbackId::new(1), cand(300001), "rater"))
        .await;
    repo.add_thread(FeedbackThread::opened(FeedbackId::new(2), cand(400002), "rater"))
        .await;
    repo
}

fn app(repo: Arc<dyn FeedbackThreadRepository>) -> Router {
    app_router(FeedbackAppState::new(repo), validator())
}

fn close_request(path: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

/// Sends a request and returns status and JSON body.
///
/// Every response of these endpoints is a JSON document.
async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json",
        "status {}",
        status
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

/// Repository whose every call fails like an unreachable database.
struct UnavailableRepository;

#[async_trait]
impl FeedbackThreadRepository for UnavailableRepository {
    async fn find_collection(
        &self,
        _cand_id: &CandId,
        _username: &str,
    ) -> Result<Option<FeedbackThreadCollection>, DomainError> {
        Err(DomainError::database("Failed to load candidate", "connection refused"))
    }

    async fn close_thread(&self, _closure: &ThreadClosure) -> Result<u64, DomainError> {
        Err(DomainError::database("Failed to close thread", "connection refused"))
    }
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn missing_cand_id_is_400() {
    let repo = Arc::new(seeded_repository().await);

    let (status, body) = send(app(repo), close_request(CLOSE_PATH, "feedbackID=1")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "invalid candID"}));
}

#[tokio::test]
async fn malformed_cand_id_is_400() {
    let repo = Arc::new(seeded_repository().await);

    for form in [
        "candID=12345&feedbackID=1",
        "candID=012345&feedbackID=1",
        "candID=abcdef&feedbackID=1",
    ] {
        let (status, body) = send(app(repo.clone()), close_request(CLOSE_PATH, form)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "form: {}", form);
        assert_eq!(body, json!({"error": "invalid candID"}));
    }
}

#[tokio::test]
async fn missing_feedback_id_is_400() {
    let repo = Arc::new(seeded_repository().await);

    let (status, body) = send(app(repo), close_request(CLOSE_PATH, "candID=300001")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing FeedbackID"}));
}

#[tokio::test]
async fn cand_id_is_checked_before_feedback_id() {
    let repo = Arc::new(seeded_repository().await);

    let (status, body) = send(app(repo), close_request(CLOSE_PATH, "")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "invalid candID"}));
}

#[tokio::test]
async fn non_form_body_is_treated_as_empty() {
    let repo = Arc::new(seeded_repository().await);
    let request = Request::builder()
        .method("POST")
        .uri(CLOSE_PATH)
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"candID":"300001","feedbackID":"1"}"#))
        .unwrap();

    let (status, body) = send(app(repo), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "invalid candID"}));
}

// =============================================================================
// Lookup
// =============================================================================

#[tokio::test]
async fn unknown_candidate_is_404() {
    let repo = Arc::new(seeded_repository().await);

    let (status, body) = send(
        app(repo),
        close_request(CLOSE_PATH, "candID=500005&feedbackID=1"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "The requested feedback thread can`t be found"}));
}

#[tokio::test]
async fn inactive_candidate_is_404() {
    let repo = seeded_repository().await;
    repo.deactivate_candidate(cand(300001)).await;

    let (status, _) = send(
        app(Arc::new(repo.clone())),
        close_request(CLOSE_PATH, "candID=300001&feedbackID=1"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        repo.thread(FeedbackId::new(1)).await.unwrap().status,
        ThreadStatus::Opened
    );
}

#[tokio::test]
async fn repository_failure_is_404_without_leaking_details() {
    let (status, body) = send(
        app(Arc::new(UnavailableRepository)),
        close_request(CLOSE_PATH, "candID=300001&feedbackID=1"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "The requested feedback thread can`t be found"}));
}

// =============================================================================
// Close
// =============================================================================

#[tokio::test]
async fn closes_thread_of_candidate() {
    let repo = seeded_repository().await;

    let (status, body) = send(
        app(Arc::new(repo.clone())),
        close_request(CLOSE_PATH, "candID=300001&feedbackID=1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let thread = repo.thread(FeedbackId::new(1)).await.unwrap();
    assert_eq!(thread.status, ThreadStatus::Closed);
    assert_eq!(thread.user_id, "jdoe");
}

#[tokio::test]
async fn legacy_path_closes_thread() {
    let repo = seeded_repository().await;

    let (status, body) = send(
        app(Arc::new(repo.clone())),
        close_request(LEGACY_CLOSE_THREAD_PATH, "candID=300001&feedbackID=1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));
    assert_eq!(
        repo.thread(FeedbackId::new(1)).await.unwrap().status,
        ThreadStatus::Closed
    );
}

#[tokio::test]
async fn numeric_string_feedback_id_is_truncated_to_integer() {
    let repo = seeded_repository().await;

    let (status, body) = send(
        app(Arc::new(repo.clone())),
        close_request(CLOSE_PATH, "candID=300001&feedbackID=1.0e0"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));
    assert_eq!(
        repo.thread(FeedbackId::new(1)).await.unwrap().status,
        ThreadStatus::Closed
    );
}

#[tokio::test]
async fn unknown_feedback_id_is_500() {
    let repo = Arc::new(seeded_repository().await);

    let (status, body) = send(
        app(repo),
        close_request(CLOSE_PATH, "candID=300001&feedbackID=99"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "No feedback thread updated"}));
}

#[tokio::test]
async fn non_numeric_feedback_id_coerces_to_zero_and_is_500() {
    let repo = Arc::new(seeded_repository().await);

    let (status, body) = send(
        app(repo),
        close_request(CLOSE_PATH, "candID=300001&feedbackID=abc"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "No feedback thread updated"}));
}

#[tokio::test]
async fn thread_of_another_candidate_is_not_closed() {
    let repo = seeded_repository().await;

    let (status, body) = send(
        app(Arc::new(repo.clone())),
        close_request(CLOSE_PATH, "candID=300001&feedbackID=2"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "No feedback thread updated"}));
    assert_eq!(
        repo.thread(FeedbackId::new(2)).await.unwrap().status,
        ThreadStatus::Opened
    );
}

#[tokio::test]
async fn closing_twice_reports_nothing_updated() {
    let repo = Arc::new(seeded_repository().await);

    let (first, _) = send(
        app(repo.clone()),
        close_request(CLOSE_PATH, "candID=300001&feedbackID=1"),
    )
    .await;
    let (second, body) = send(
        app(repo),
        close_request(CLOSE_PATH, "candID=300001&feedbackID=1"),
    )
    .await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "No feedback thread updated"}));
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn invalid_token_is_401() {
    let repo = Arc::new(seeded_repository().await);
    let request = Request::builder()
        .method("POST")
        .uri(CLOSE_PATH)
        .header(header::AUTHORIZATION, "Bearer wrong")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("candID=300001&feedbackID=1"))
        .unwrap();

    let (status, _) = send(app(repo), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
