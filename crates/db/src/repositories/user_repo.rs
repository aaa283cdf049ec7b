//! Repository for the `users` table.

use dxm_core::user::NewUser;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::User;

const COLUMNS: &str = "id, username, password";

/// Name of the unique constraint on `users.username`.
pub const UQ_USERNAME: &str = "uq_users_username";

pub struct UserRepo;

impl UserRepo {
    /// Insert a new user. Fails with a unique violation on [`UQ_USERNAME`]
    /// when the username is taken.
    pub async fn create(pool: &PgPool, input: &NewUser) -> Result<User, sqlx::Error> {
        let query =
            format!("INSERT INTO users (username, password) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.password)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }
}
