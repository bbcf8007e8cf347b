use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures surfaced by the diagnosis handler.
///
/// Every variant maps to the same structured 500 body so the caller always
/// receives `{ success, message, error }`, never a bare transport error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The completion API's reply was not valid JSON, or fields were missing
    /// so the mapping could not proceed.
    #[error("Failed to generate a valid JSON response.")]
    UpstreamDecode(#[source] serde_json::Error),

    /// Anything else that fails at the handler boundary, including the
    /// outbound call itself.
    #[error("An error occurred while processing your request.")]
    Upstream(#[source] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = match &self {
            ApiError::UpstreamDecode(e) => e.to_string(),
            ApiError::Upstream(e) => format!("{e:#}"),
        };

        tracing::error!(error = %detail, "request failed");

        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
            "error": detail,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
