use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use dxm_core::book_call::NewBookCallSubmission;
use dxm_core::contact::NewContactSubmission;
use dxm_core::phone_callback::NewPhoneCallback;
use dxm_core::types::{DbId, Timestamp};
use dxm_core::user::NewUser;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreBackend, SubmissionStore};
use crate::error::StorageError;
use crate::models::book_call_submission::BookCallSubmission;
use crate::models::contact_submission::ContactSubmission;
use crate::models::dxm_number::PhoneCallbackRequest;
use crate::models::user::User;

/// Ephemeral backend. State lives only as long as the process.
///
/// Records are appended to per-kind arenas in insertion order. Id and
/// timestamp assignment happen under the same write guard as the insert, so
/// concurrent creates never interleave.
#[derive(Default)]
pub struct MemStore {
    arena: RwLock<Arena>,
}

#[derive(Default)]
struct Arena {
    users: HashMap<Uuid, User>,
    contact_submissions: Vec<ContactSubmission>,
    book_call_submissions: Vec<BookCallSubmission>,
    phone_callbacks: Vec<PhoneCallbackRequest>,
    last_book_call_id: DbId,
    last_phone_callback_id: DbId,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Microsecond precision, matching what PostgreSQL `TIMESTAMPTZ` keeps.
fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

/// Newest first by `created`; equal timestamps keep the later insert first.
fn newest_first<T: Clone>(records: &[T], created: impl Fn(&T) -> Timestamp) -> Vec<T> {
    let mut out: Vec<T> = records.iter().rev().cloned().collect();
    out.sort_by(|a, b| created(b).cmp(&created(a)));
    out
}

#[async_trait]
impl SubmissionStore for MemStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Memory
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn create_user(&self, input: &NewUser) -> Result<User, StorageError> {
        let mut arena = self.arena.write().await;
        if arena.users.values().any(|u| u.username == input.username) {
            return Err(StorageError::UsernameTaken(input.username.clone()));
        }
        let user = User {
            id: Uuid::new_v4(),
            username: input.username.clone(),
            password: input.password.clone(),
        };
        arena.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StorageError> {
        Ok(self.arena.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let arena = self.arena.read().await;
        Ok(arena.users.values().find(|u| u.username == username).cloned())
    }

    async fn create_contact_submission(
        &self,
        input: &NewContactSubmission,
    ) -> Result<ContactSubmission, StorageError> {
        let mut arena = self.arena.write().await;
        let record = ContactSubmission {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            email: input.email.clone(),
            company: input.company.clone(),
            project_type: input.project_type.clone(),
            budget: input.budget.clone(),
            message: input.message.clone(),
            created_at: now(),
        };
        arena.contact_submissions.push(record.clone());
        Ok(record)
    }

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StorageError> {
        let arena = self.arena.read().await;
        Ok(newest_first(&arena.contact_submissions, |r| r.created_at))
    }

    async fn create_book_call_submission(
        &self,
        input: &NewBookCallSubmission,
    ) -> Result<BookCallSubmission, StorageError> {
        let mut arena = self.arena.write().await;
        arena.last_book_call_id += 1;
        let record = BookCallSubmission {
            id: arena.last_book_call_id,
            name: input.name.clone(),
            email: input.email.clone(),
            company: input.company.clone(),
            selected_service: input.selected_service.as_str().to_string(),
            problems: input.problems.clone(),
            additional_info: input.additional_info.clone(),
            submitted_at: now(),
        };
        arena.book_call_submissions.push(record.clone());
        Ok(record)
    }

    async fn list_book_call_submissions(&self) -> Result<Vec<BookCallSubmission>, StorageError> {
        let arena = self.arena.read().await;
        Ok(newest_first(&arena.book_call_submissions, |r| r.submitted_at))
    }

    async fn create_phone_callback(
        &self,
        input: &NewPhoneCallback,
    ) -> Result<PhoneCallbackRequest, StorageError> {
        let mut arena = self.arena.write().await;
        arena.last_phone_callback_id += 1;
        let record = PhoneCallbackRequest {
            id: arena.last_phone_callback_id,
            phone_number: input.phone_number.clone(),
            created_at: now(),
        };
        arena.phone_callbacks.push(record.clone());
        Ok(record)
    }

    async fn list_phone_callbacks(&self) -> Result<Vec<PhoneCallbackRequest>, StorageError> {
        let arena = self.arena.read().await;
        Ok(newest_first(&arena.phone_callbacks, |r| r.created_at))
    }
}
