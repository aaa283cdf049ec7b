//! Store contract against the in-memory backend.

mod common;

use std::sync::Arc;

use dxm_db::store::{MemStore, StoreBackend, SubmissionStore};

#[tokio::test]
async fn empty_store_lists_nothing() {
    common::empty_store_lists_nothing(&MemStore::new()).await;
}

#[tokio::test]
async fn contact_create_then_list() {
    common::contact_create_then_list(&MemStore::new()).await;
}

#[tokio::test]
async fn contact_list_is_newest_first() {
    common::contact_list_is_newest_first(&MemStore::new()).await;
}

#[tokio::test]
async fn book_call_ids_are_sequential() {
    common::book_call_ids_are_sequential(&MemStore::new()).await;
}

#[tokio::test]
async fn phone_callback_create_then_list() {
    common::phone_callback_create_then_list(&MemStore::new()).await;
}

#[tokio::test]
async fn users_are_unique_by_username() {
    common::users_are_unique_by_username(&MemStore::new()).await;
}

#[tokio::test]
async fn serialized_shapes() {
    common::serialized_shapes(&MemStore::new()).await;
}

#[tokio::test]
async fn reports_memory_backend() {
    let store = MemStore::new();
    assert_eq!(store.backend(), StoreBackend::Memory);
    assert!(store.health_check().await.is_ok());
}

#[tokio::test]
async fn without_database_url_memory_is_selected() {
    let store = dxm_db::store::open_store(None).await.unwrap();
    assert_eq!(store.backend(), StoreBackend::Memory);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_are_all_kept_in_order() {
    let store = Arc::new(MemStore::new());
    let mut handles = Vec::new();
    for i in 0..32 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .create_book_call_submission(&common::booking(&format!("caller-{i}")))
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let listed = store.list_book_call_submissions().await.unwrap();
    assert_eq!(listed.len(), 32);
    assert!(listed
        .windows(2)
        .all(|w| w[0].submitted_at >= w[1].submitted_at && w[0].id > w[1].id));
}
