use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Stored as given. Never serialized.
    #[serde(skip_serializing)]
    pub password: String,
}
