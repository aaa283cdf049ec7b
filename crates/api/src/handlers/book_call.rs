//! Handlers for book-a-call requests.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use dxm_core::book_call::BookCallForm;
use dxm_core::validation::parse_form;

use crate::error::{AppError, AppResult};
use crate::handlers::json_body;
use crate::response::{DataResponse, SubmissionResponse};
use crate::state::AppState;

const INVALID_FORM: &str = "Invalid form data";

// ---------------------------------------------------------------------------
// POST /book-call
// ---------------------------------------------------------------------------

/// Validate and store a consultation booking.
pub async fn submit_book_call(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload)
        .and_then(parse_form::<BookCallForm>)
        .map_err(|e| AppError::invalid_form(INVALID_FORM, e))?;

    let submission = state.store.create_book_call_submission(&input).await?;

    tracing::info!(
        submission_id = submission.id,
        service = %submission.selected_service,
        "New book-call submission",
    );

    Ok(Json(SubmissionResponse::new(
        "Call booked successfully",
        submission.id,
    )))
}

// ---------------------------------------------------------------------------
// GET /book-call/submissions
// ---------------------------------------------------------------------------

/// List every booking, newest first.
pub async fn list_book_call_submissions(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let submissions = state.store.list_book_call_submissions().await?;
    Ok(Json(DataResponse::new(submissions)))
}
