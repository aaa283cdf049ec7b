//! Handlers for phone-callback numbers captured by the voice widget.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use dxm_core::phone_callback::PhoneCallbackForm;
use dxm_core::validation::parse_form;

use crate::error::{AppError, AppResult};
use crate::handlers::json_body;
use crate::response::{DataResponse, SubmissionResponse};
use crate::state::AppState;

const INVALID_FORM: &str = "Invalid phone number data";

// ---------------------------------------------------------------------------
// POST /dxm-number
// ---------------------------------------------------------------------------

/// Validate and store an E.164 phone number for a callback.
pub async fn submit_dxm_number(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload)
        .and_then(parse_form::<PhoneCallbackForm>)
        .map_err(|e| AppError::invalid_form(INVALID_FORM, e))?;

    let request = state.store.create_phone_callback(&input).await?;

    // The number itself is personal data; log the id only.
    tracing::info!(submission_id = request.id, "New DXM number saved");

    Ok(Json(SubmissionResponse::new(
        "Phone number saved successfully",
        request.id,
    )))
}

// ---------------------------------------------------------------------------
// GET /dxm-number/submissions
// ---------------------------------------------------------------------------

/// List every saved number, newest first.
pub async fn list_dxm_numbers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let requests = state.store.list_phone_callbacks().await?;
    Ok(Json(DataResponse::new(requests)))
}
