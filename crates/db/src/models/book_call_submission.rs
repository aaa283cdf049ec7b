use dxm_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `book_call_submissions` table.
///
/// `selected_service` holds the service slug (see
/// [`dxm_core::book_call::SelectedService`]).
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCallSubmission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub company: String,
    pub selected_service: String,
    pub problems: String,
    pub additional_info: Option<String>,
    pub submitted_at: Timestamp,
}
