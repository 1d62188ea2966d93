use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::Deserialize;

use crate::analysis::Report;
use crate::server::error::ApiError;
use crate::server::AppState;

const FORM_HTML: &str = include_str!("../../static/index.html");

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// `POST /api/check`
///
/// A body that is not valid JSON is an internal failure (500); a missing or
/// blank `url` is a 400. Unreachable targets still answer 200 with an
/// error-status report.
pub async fn check(
    State(state): State<AppState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<Report>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::Internal(rejection.body_text()))?;

    let url = request
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or(ApiError::MissingUrl)?;

    let report = state.checker.check(url).await;
    Ok(Json(report))
}

/// `GET /` serves the check form
pub async fn index() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-cache, no-store, must-revalidate")],
        Html(FORM_HTML),
    )
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
