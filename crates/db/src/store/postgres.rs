use async_trait::async_trait;
use dxm_core::book_call::NewBookCallSubmission;
use dxm_core::contact::NewContactSubmission;
use dxm_core::phone_callback::NewPhoneCallback;
use dxm_core::user::NewUser;
use uuid::Uuid;

use super::{StoreBackend, SubmissionStore};
use crate::error::{is_unique_violation, StorageError};
use crate::models::book_call_submission::BookCallSubmission;
use crate::models::contact_submission::ContactSubmission;
use crate::models::dxm_number::PhoneCallbackRequest;
use crate::models::user::User;
use crate::repositories::user_repo::UQ_USERNAME;
use crate::repositories::{BookCallSubmissionRepo, ContactSubmissionRepo, DxmNumberRepo, UserRepo};
use crate::DbPool;

/// Durable backend: one statement per operation against PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Postgres
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn create_user(&self, input: &NewUser) -> Result<User, StorageError> {
        UserRepo::create(&self.pool, input).await.map_err(|e| {
            if is_unique_violation(&e, UQ_USERNAME) {
                StorageError::UsernameTaken(input.username.clone())
            } else {
                StorageError::Database(e)
            }
        })
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StorageError> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        Ok(UserRepo::find_by_username(&self.pool, username).await?)
    }

    async fn create_contact_submission(
        &self,
        input: &NewContactSubmission,
    ) -> Result<ContactSubmission, StorageError> {
        Ok(ContactSubmissionRepo::create(&self.pool, input).await?)
    }

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StorageError> {
        Ok(ContactSubmissionRepo::list(&self.pool).await?)
    }

    async fn create_book_call_submission(
        &self,
        input: &NewBookCallSubmission,
    ) -> Result<BookCallSubmission, StorageError> {
        Ok(BookCallSubmissionRepo::create(&self.pool, input).await?)
    }

    async fn list_book_call_submissions(&self) -> Result<Vec<BookCallSubmission>, StorageError> {
        Ok(BookCallSubmissionRepo::list(&self.pool).await?)
    }

    async fn create_phone_callback(
        &self,
        input: &NewPhoneCallback,
    ) -> Result<PhoneCallbackRequest, StorageError> {
        Ok(DxmNumberRepo::create(&self.pool, input).await?)
    }

    async fn list_phone_callbacks(&self) -> Result<Vec<PhoneCallbackRequest>, StorageError> {
        Ok(DxmNumberRepo::list(&self.pool).await?)
    }
}
