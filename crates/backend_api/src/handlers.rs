use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Json,
};
use std::sync::Arc;

use ai_client::ChatCompletion;
use models::{Data, FinancialDiagnosisResponse, FinancialSnapshot};

use crate::{error::ApiError, prompt, Result};

pub type ChatState = Arc<dyn ChatCompletion>;

/// POST /
/// Runs a financial diagnosis for the submitted snapshot
pub async fn diagnose(
    State(client): State<ChatState>,
    Json(snapshot): Json<FinancialSnapshot>,
) -> Result<impl IntoResponse> {
    tracing::info!(user = %snapshot.user_info.name, "received diagnosis request");

    let messages =
        prompt::build_messages(&snapshot).map_err(|e| ApiError::Upstream(e.into()))?;

    let reply = client
        .complete(messages)
        .await
        .map_err(ApiError::Upstream)?;

    let data = Data::from_reply(&reply).map_err(ApiError::UpstreamDecode)?;

    Ok((
        StatusCode::OK,
        Json(FinancialDiagnosisResponse {
            success: true,
            data,
        }),
    ))
}

/// GET /
/// The original API redirected its root to the documentation page
pub async fn docs_redirect() -> impl IntoResponse {
    Redirect::to("/api-docs")
}

/// GET /api-docs
/// Human-readable API documentation
pub async fn api_docs() -> impl IntoResponse {
    Html(include_str!("api_docs.html"))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "financial-diagnosis-api"
    }))
}
