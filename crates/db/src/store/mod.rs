//! The storage capability and its two interchangeable backends.
//!
//! A backend is chosen once at start-up by [`open_store`] and shared for the
//! lifetime of the process as `Arc<dyn SubmissionStore>`.

mod memory;
mod postgres;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use dxm_core::book_call::NewBookCallSubmission;
use dxm_core::contact::NewContactSubmission;
use dxm_core::phone_callback::NewPhoneCallback;
use dxm_core::user::NewUser;
use serde::Serialize;
use uuid::Uuid;

use crate::error::StorageError;
use crate::models::book_call_submission::BookCallSubmission;
use crate::models::contact_submission::ContactSubmission;
use crate::models::dxm_number::PhoneCallbackRequest;
use crate::models::user::User;

pub use memory::MemStore;
pub use postgres::PgStore;

/// Which concrete backend is serving requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    Postgres,
}

impl StoreBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreBackend::Memory => "memory",
            StoreBackend::Postgres => "postgres",
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable record of validated submissions.
///
/// Every `create_*` assigns the identifier and timestamp itself and returns
/// the stored record. Every `list_*` returns all records newest first, or an
/// empty list. Records are never updated or deleted.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    fn backend(&self) -> StoreBackend;

    /// Confirm the medium is reachable.
    async fn health_check(&self) -> Result<(), StorageError>;

    async fn create_user(&self, input: &NewUser) -> Result<User, StorageError>;

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StorageError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;

    async fn create_contact_submission(
        &self,
        input: &NewContactSubmission,
    ) -> Result<ContactSubmission, StorageError>;

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StorageError>;

    async fn create_book_call_submission(
        &self,
        input: &NewBookCallSubmission,
    ) -> Result<BookCallSubmission, StorageError>;

    async fn list_book_call_submissions(&self) -> Result<Vec<BookCallSubmission>, StorageError>;

    async fn create_phone_callback(
        &self,
        input: &NewPhoneCallback,
    ) -> Result<PhoneCallbackRequest, StorageError>;

    async fn list_phone_callbacks(&self) -> Result<Vec<PhoneCallbackRequest>, StorageError>;
}

/// Select the backend: a connection string means PostgreSQL (connected,
/// health-checked and migrated here), no connection string means memory.
pub async fn open_store(
    database_url: Option<&str>,
) -> Result<Arc<dyn SubmissionStore>, StorageError> {
    let Some(url) = database_url else {
        tracing::warn!("DATABASE_URL not set, submissions will be kept in memory only");
        return Ok(Arc::new(MemStore::new()));
    };

    let pool = crate::create_pool(url).await?;
    tracing::info!("Database connection pool created");

    crate::health_check(&pool).await?;
    tracing::info!("Database health check passed");

    crate::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(Arc::new(PgStore::new(pool)))
}
