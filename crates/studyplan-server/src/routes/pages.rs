//! Form and results pages.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use studyplan_planner::parse_hours;
use tracing::{info, warn};

use super::error_response;
use crate::package::build_study_package;
use crate::render::{render_index, render_results};
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/generate", post(generate))
}

#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    subject: Option<String>,
    hours: Option<String>,
    sample_text: Option<String>,
    difficulty: Option<String>,
}

/// GET / — input form.
async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_index(&state.question_bank.subjects()))
}

/// POST /generate — schedule, quiz, summary and tips for the submitted form.
async fn generate(
    State(state): State<Arc<AppState>>,
    Form(form): Form<GenerateForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let subject = form.subject.unwrap_or_else(|| "General".to_string());
    let raw_hours = form.hours.unwrap_or_else(|| "3".to_string());
    let hours = parse_hours(&raw_hours).map_err(|e| {
        warn!("Rejected /generate: {}", e);
        error_response(e)
    })?;
    let sample_text = form.sample_text.unwrap_or_default();
    let difficulty = form.difficulty.unwrap_or_default();

    let package = build_study_package(&state, &subject, hours, &sample_text, &difficulty);
    info!(
        "Generated plan: subject={:?} hours={} sessions={} questions={} keywords={}",
        subject,
        hours,
        package.plan.len(),
        package.quiz.len(),
        package.keywords.len()
    );

    Ok(Html(render_results(&package)))
}
