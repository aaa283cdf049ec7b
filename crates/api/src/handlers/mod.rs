pub mod ai;
pub mod book_call;
pub mod contact;
pub mod dxm_number;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use dxm_core::validation::{ValidationError, BODY_FIELD};

/// Unwrap a JSON body, turning an unreadable one into a body violation so
/// it is answered with the same envelope as any other invalid form.
pub(crate) fn json_body(
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<serde_json::Value, ValidationError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ValidationError::single(BODY_FIELD, "invalid_json", rejection.body_text()))
}
