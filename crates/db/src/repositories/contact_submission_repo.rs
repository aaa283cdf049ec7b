//! Repository for the `contact_submissions` table.

use dxm_core::contact::NewContactSubmission;
use sqlx::PgPool;

use crate::models::contact_submission::ContactSubmission;

const COLUMNS: &str = "id, name, email, company, project_type, budget, message, created_at";

pub struct ContactSubmissionRepo;

impl ContactSubmissionRepo {
    /// Insert a submission; id and `created_at` come from column defaults.
    pub async fn create(
        pool: &PgPool,
        input: &NewContactSubmission,
    ) -> Result<ContactSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_submissions \
                (name, email, company, project_type, budget, message) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.company)
            .bind(&input.project_type)
            .bind(&input.budget)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// All submissions, newest first. Ties on the timestamp fall back to
    /// insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_submissions ORDER BY created_at DESC, seq DESC"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .fetch_all(pool)
            .await
    }
}
