//! Repository for the `book_call_submissions` table.

use dxm_core::book_call::NewBookCallSubmission;
use sqlx::PgPool;

use crate::models::book_call_submission::BookCallSubmission;

const COLUMNS: &str = "\
    id, name, email, company, selected_service, problems, \
    additional_info, submitted_at";

pub struct BookCallSubmissionRepo;

impl BookCallSubmissionRepo {
    /// Insert a booking, returning the full row with its sequential id.
    pub async fn create(
        pool: &PgPool,
        input: &NewBookCallSubmission,
    ) -> Result<BookCallSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO book_call_submissions \
                (name, email, company, selected_service, problems, additional_info) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BookCallSubmission>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.company)
            .bind(input.selected_service.as_str())
            .bind(&input.problems)
            .bind(&input.additional_info)
            .fetch_one(pool)
            .await
    }

    /// All bookings, newest first. Ties on the timestamp fall back to id.
    pub async fn list(pool: &PgPool) -> Result<Vec<BookCallSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM book_call_submissions ORDER BY submitted_at DESC, id DESC"
        );
        sqlx::query_as::<_, BookCallSubmission>(&query)
            .fetch_all(pool)
            .await
    }
}
