use dxm_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `dxm_numbers` table: a phone number the voice agent
/// should call back.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneCallbackRequest {
    pub id: DbId,
    pub phone_number: String,
    pub created_at: Timestamp,
}
