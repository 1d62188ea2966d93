use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors surfaced at the HTTP boundary
///
/// A failed fetch is not one of these; it is a normal 200 report.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("URL is required")]
    MissingUrl,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = serde_json::json!({
            "error": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}
