//! Liveness probe.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn health_router() -> Router {
    Router::new().route("/health", get(health))
}
