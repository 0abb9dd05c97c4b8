//! HTTP route handlers.

pub mod download;
pub mod health;
pub mod pages;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use studyplan_core::Error;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(pages::routes())
        .merge(download::routes())
        .merge(health::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Map a library error to the status and plain-text body a handler returns.
pub(crate) fn error_response(err: Error) -> (StatusCode, String) {
    let status = match err {
        Error::InvalidHours(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}
