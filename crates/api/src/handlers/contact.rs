//! Handlers for the contact form.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use dxm_core::contact::ContactForm;
use dxm_core::validation::parse_form;

use crate::error::{AppError, AppResult};
use crate::handlers::json_body;
use crate::response::{DataResponse, SubmissionResponse};
use crate::state::AppState;

const INVALID_FORM: &str = "Invalid form data";

// ---------------------------------------------------------------------------
// POST /contact
// ---------------------------------------------------------------------------

/// Validate and store a contact form submission.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload)
        .and_then(parse_form::<ContactForm>)
        .map_err(|e| AppError::invalid_form(INVALID_FORM, e))?;

    let submission = state.store.create_contact_submission(&input).await?;

    tracing::info!(
        submission_id = %submission.id,
        project_type = submission.project_type.as_deref().unwrap_or("-"),
        "New contact submission",
    );

    Ok(Json(SubmissionResponse::new(
        "Contact form submitted successfully",
        submission.id,
    )))
}

// ---------------------------------------------------------------------------
// GET /contact/submissions
// ---------------------------------------------------------------------------

/// List every contact submission, newest first.
pub async fn list_contact_submissions(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let submissions = state.store.list_contact_submissions().await?;
    Ok(Json(DataResponse::new(submissions)))
}
