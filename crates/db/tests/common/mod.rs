//! Store contract shared by every backend.
//!
//! Each function exercises one property against a fresh, empty store. The
//! same suite runs unmodified against `MemStore` and `PgStore`.

use assert_matches::assert_matches;
use chrono::{SubsecRound, Utc};
use dxm_core::book_call::{NewBookCallSubmission, SelectedService};
use dxm_core::contact::NewContactSubmission;
use dxm_core::phone_callback::NewPhoneCallback;
use dxm_core::user::NewUser;
use dxm_db::store::SubmissionStore;
use dxm_db::StorageError;

pub fn contact(name: &str) -> NewContactSubmission {
    NewContactSubmission {
        name: name.to_string(),
        email: "jo@x.com".to_string(),
        company: None,
        project_type: Some("website".to_string()),
        budget: None,
        message: "Need a new site please".to_string(),
    }
}

pub fn booking(name: &str) -> NewBookCallSubmission {
    NewBookCallSubmission {
        name: name.to_string(),
        email: "sam@builders.co.uk".to_string(),
        company: "Sam's Roofing".to_string(),
        selected_service: SelectedService::AiCustomerSupport,
        problems: "Missing calls while on site".to_string(),
        additional_info: None,
    }
}

pub async fn empty_store_lists_nothing(store: &dyn SubmissionStore) {
    assert!(store.list_contact_submissions().await.unwrap().is_empty());
    assert!(store.list_book_call_submissions().await.unwrap().is_empty());
    assert!(store.list_phone_callbacks().await.unwrap().is_empty());
}

pub async fn contact_create_then_list(store: &dyn SubmissionStore) {
    let before = Utc::now().trunc_subsecs(6);
    let created = store.create_contact_submission(&contact("Jo Smith")).await.unwrap();

    assert!(!created.id.is_nil());
    assert!(created.created_at >= before);
    assert_eq!(created.name, "Jo Smith");
    assert_eq!(created.company, None);
    assert_eq!(created.project_type.as_deref(), Some("website"));

    let listed = store.list_contact_submissions().await.unwrap();
    assert_eq!(listed, vec![created]);
}

pub async fn contact_list_is_newest_first(store: &dyn SubmissionStore) {
    let first = store.create_contact_submission(&contact("First")).await.unwrap();
    let second = store.create_contact_submission(&contact("Second")).await.unwrap();
    let third = store.create_contact_submission(&contact("Third")).await.unwrap();

    let listed = store.list_contact_submissions().await.unwrap();
    let names: Vec<&str> = listed.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);
    assert!(listed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    assert_ne!(first.id, second.id);
    assert_ne!(second.id, third.id);
}

pub async fn book_call_ids_are_sequential(store: &dyn SubmissionStore) {
    let a = store.create_book_call_submission(&booking("A")).await.unwrap();
    let b = store.create_book_call_submission(&booking("B")).await.unwrap();

    assert_eq!(b.id, a.id + 1);
    assert_eq!(a.selected_service, "ai-customer-support");

    let listed = store.list_book_call_submissions().await.unwrap();
    assert_eq!(listed, vec![b, a]);
}

pub async fn phone_callback_create_then_list(store: &dyn SubmissionStore) {
    let input = NewPhoneCallback {
        phone_number: "+447911123456".to_string(),
    };
    let created = store.create_phone_callback(&input).await.unwrap();
    assert_eq!(created.phone_number, "+447911123456");

    let listed = store.list_phone_callbacks().await.unwrap();
    assert_eq!(listed, vec![created]);
}

pub async fn users_are_unique_by_username(store: &dyn SubmissionStore) {
    let input = NewUser {
        username: "admin".to_string(),
        password: "hunter22".to_string(),
    };
    let user = store.create_user(&input).await.unwrap();

    let by_name = store.find_user_by_username("admin").await.unwrap();
    assert_eq!(by_name.as_ref(), Some(&user));
    let by_id = store.find_user(user.id).await.unwrap();
    assert_eq!(by_id, Some(user));

    assert!(store.find_user_by_username("nobody").await.unwrap().is_none());
    assert_matches!(
        store.create_user(&input).await,
        Err(StorageError::UsernameTaken(name)) if name == "admin"
    );
}

pub async fn serialized_shapes(store: &dyn SubmissionStore) {
    let created = store.create_contact_submission(&contact("Jo")).await.unwrap();
    let json = serde_json::to_value(&created).unwrap();
    let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["budget", "company", "createdAt", "email", "id", "message", "name", "projectType"]
    );

    let booking = store.create_book_call_submission(&booking("Sam")).await.unwrap();
    let json = serde_json::to_value(&booking).unwrap();
    assert!(json["id"].is_i64());
    assert!(json["submittedAt"].is_string());
    assert!(json["additionalInfo"].is_null());
}
