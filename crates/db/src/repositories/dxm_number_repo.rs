//! Repository for the `dxm_numbers` table.

use dxm_core::phone_callback::NewPhoneCallback;
use sqlx::PgPool;

use crate::models::dxm_number::PhoneCallbackRequest;

const COLUMNS: &str = "id, phone_number, created_at";

pub struct DxmNumberRepo;

impl DxmNumberRepo {
    pub async fn create(
        pool: &PgPool,
        input: &NewPhoneCallback,
    ) -> Result<PhoneCallbackRequest, sqlx::Error> {
        let query =
            format!("INSERT INTO dxm_numbers (phone_number) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, PhoneCallbackRequest>(&query)
            .bind(&input.phone_number)
            .fetch_one(pool)
            .await
    }

    /// All callback requests, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<PhoneCallbackRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dxm_numbers ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, PhoneCallbackRequest>(&query)
            .fetch_all(pool)
            .await
    }
}
