//! Liveness route.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

/// GET /health — loaded resources at a glance.
async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "subjects": state.question_bank.subjects(),
        "questions": state.question_bank.len(),
        "language": state.resources.language,
        "stopwords": state.resources.stopwords.len(),
    }))
}
