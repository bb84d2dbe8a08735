//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the feedback endpoints behind the auth middleware,
//! the unauthenticated health probe, and request tracing. `with_server_layers`
//! adds the timeout and CORS policy from `ServerConfig`.

pub mod feedback;
pub mod health;
pub mod middleware;

use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::{BoxError, Json, Router};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use self::feedback::ErrorResponse;

pub use feedback::{feedback_router, FeedbackAppState};
pub use health::health_router;
pub use middleware::{auth_middleware, AuthState, RequireAuth};

/// Builds the application router.
pub fn app_router(feedback: FeedbackAppState, validator: AuthState) -> Router {
    let protected = feedback_router()
        .with_state(feedback)
        .layer(axum::middleware::from_fn_with_state(validator, auth_middleware));

    Router::new()
        .merge(protected)
        .merge(health_router())
        .layer(TraceLayer::new_for_http())
}

/// Applies request timeout and CORS from configuration.
pub fn with_server_layers(router: Router, config: &ServerConfig) -> Router {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    with_timeout(router, config.request_timeout()).layer(cors)
}

/// Bounds request handling time; an elapsed request gets a 408 error envelope.
fn with_timeout(router: Router, timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .timeout(timeout),
    )
}

async fn handle_middleware_error(error: BoxError) -> (StatusCode, Json<ErrorResponse>) {
    if error.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("Request timed out");
        return (
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorResponse::new("Request timed out")),
        );
    }

    tracing::error!(error = %error, "Unhandled middleware error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal server error")),
    )
}
