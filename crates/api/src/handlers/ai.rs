//! Pass-through handlers for the "Try AI" demos.
//!
//! Each call is forwarded once to the configured gateway and its result
//! relayed as-is. No retries, caching or rate limiting.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use dxm_ai::{BusinessAnalysis, GeneratedContent, TextAnalysis};
use dxm_core::error::CoreError;
use dxm_core::validation::require_text;

use crate::error::AppResult;
use crate::handlers::json_body;
use crate::state::AppState;

/// Pull the required text field out of the body.
fn required_field(
    payload: Result<Json<serde_json::Value>, JsonRejection>,
    field: &str,
    message: &str,
) -> Result<String, CoreError> {
    let body = json_body(payload)?;
    Ok(require_text(&body, field, message)?)
}

// ---------------------------------------------------------------------------
// POST /ai/analyse-text
// ---------------------------------------------------------------------------

pub async fn analyze_text(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<Json<TextAnalysis>> {
    let text = required_field(payload, "text", "Text is required")?;
    let gateway = state.ai_gateway()?;
    let analysis = gateway.analyze_text(&text).await?;
    Ok(Json(analysis))
}

// ---------------------------------------------------------------------------
// POST /ai/generate-content
// ---------------------------------------------------------------------------

pub async fn generate_content(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<Json<GeneratedContent>> {
    let prompt = required_field(payload, "prompt", "Prompt is required")?;
    let gateway = state.ai_gateway()?;
    let content = gateway.generate_content(&prompt).await?;
    Ok(Json(content))
}

// ---------------------------------------------------------------------------
// POST /ai/analyse-business
// ---------------------------------------------------------------------------

pub async fn analyze_business(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<Json<BusinessAnalysis>> {
    let description = required_field(payload, "description", "Business description is required")?;
    let gateway = state.ai_gateway()?;
    let analysis = gateway.analyze_business(&description).await?;
    Ok(Json(analysis))
}
