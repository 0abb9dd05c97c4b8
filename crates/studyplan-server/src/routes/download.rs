//! Schedule CSV download.

use std::sync::Arc;

use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use studyplan_planner::{download_filename, generate_study_plan, parse_hours, schedule_to_csv};
use tracing::{info, warn};

use super::error_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/download_schedule", get(download_schedule))
}

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    subject: Option<String>,
    hours: Option<String>,
}

/// GET /download_schedule — the schedule as a CSV attachment.
async fn download_schedule(
    Query(query): Query<DownloadQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let subject = query.subject.unwrap_or_else(|| "General".to_string());
    let raw_hours = query.hours.unwrap_or_else(|| "4".to_string());
    let hours = parse_hours(&raw_hours).map_err(|e| {
        warn!("Rejected /download_schedule: {}", e);
        error_response(e)
    })?;

    let plan = generate_study_plan(&subject, hours);
    let csv = schedule_to_csv(&plan).map_err(error_response)?;
    let filename = download_filename(&subject, &chrono::Local::now());
    info!("Schedule download: {} ({} sessions)", filename, plan.len());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&filename)),
        ],
        csv,
    ))
}

/// `attachment` disposition for `filename`.
///
/// The quoted `filename` escapes `"` and `\`, with control and non-ASCII
/// characters replaced by `_`. When that replacement happened the exact name is
/// also sent as an RFC 5987 `filename*`.
fn content_disposition(filename: &str) -> String {
    let mut fallback = String::with_capacity(filename.len());
    let mut lossy = false;
    for c in filename.chars() {
        match c {
            '"' | '\\' => {
                fallback.push('\\');
                fallback.push(c);
            }
            c if c.is_ascii() && !c.is_ascii_control() => fallback.push(c),
            _ => {
                fallback.push('_');
                lossy = true;
            }
        }
    }

    if lossy {
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            fallback,
            urlencoding::encode(filename)
        )
    } else {
        format!("attachment; filename=\"{}\"", fallback)
    }
}
