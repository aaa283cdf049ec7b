//! HTTP-level integration tests for the contact form endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, mem_app, post_json, post_raw, FailingStore};
use serde_json::json;

fn valid_contact() -> serde_json::Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "message": "I need a new website for my plumbing firm",
    })
}

// ---------------------------------------------------------------------------
// Submit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_contact_returns_success_and_id() {
    let (app, _store) = mem_app();
    let response = post_json(app, "/api/contact", valid_contact()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Contact form submitted successfully");
    let id = json["submissionId"].as_str().unwrap();
    assert_eq!(id.len(), 36, "contact ids are UUID strings");
}

#[tokio::test]
async fn short_message_is_rejected_with_field_error() {
    let (app, store) = mem_app();
    let mut payload = valid_contact();
    payload["message"] = json!("Hi");

    let response = post_json(app, "/api/contact", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid form data");
    let errors = json["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == "message"));

    assert!(store.list_contact_submissions().await.unwrap().is_empty());
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let (app, _store) = mem_app();
    let mut payload = valid_contact();
    payload["email"] = json!("not-an-email");

    let response = post_json(app, "/api/contact", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"][0]["field"], "email");
    assert_eq!(json["errors"][0]["code"], "email");
}

#[tokio::test]
async fn missing_fields_are_all_reported() {
    let (app, _store) = mem_app();
    let response = post_json(app, "/api/contact", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let fields: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["email", "message", "name"]);
}

#[tokio::test]
async fn malformed_json_uses_the_error_envelope() {
    let (app, _store) = mem_app();
    let response = post_raw(app, "/api/contact", "application/json", "{not json".into()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid form data");
    assert_eq!(json["errors"][0]["field"], "body");
}

#[tokio::test]
async fn array_payload_is_rejected_and_not_stored() {
    let (app, store) = mem_app();
    let payload = json!(["Jo", "jo@x.com", null, null, null, "Need a new site please"]);

    let response = post_json(app, "/api/contact", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid form data");
    assert_eq!(json["errors"][0]["field"], "body");
    assert!(store.list_contact_submissions().await.unwrap().is_empty());
}

#[tokio::test]
async fn storage_failure_returns_500_without_details() {
    let app = common::build_test_app(Arc::new(FailingStore), None);
    let response = post_json(app, "/api/contact", valid_contact()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Internal server error");
    assert!(json.get("errors").is_none());
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_listing_returns_empty_data() {
    let (app, _store) = mem_app();
    let response = get(app, "/api/contact/submissions").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "success": true, "data": [] }));
}

#[tokio::test]
async fn listing_returns_stored_submission_in_camel_case() {
    let (app, _store) = mem_app();
    let mut payload = valid_contact();
    payload["projectType"] = json!("website");
    payload["company"] = json!("");

    let created = body_json(post_json(app.clone(), "/api/contact", payload).await).await;

    let json = body_json(get(app, "/api/contact/submissions").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], created["submissionId"]);
    assert_eq!(data[0]["name"], "Jane Doe");
    assert_eq!(data[0]["projectType"], "website");
    assert!(data[0]["company"].is_null());
    assert!(data[0]["createdAt"].is_string());
}

#[tokio::test]
async fn listing_is_newest_first() {
    let (app, _store) = mem_app();
    for name in ["First", "Second", "Third"] {
        let mut payload = valid_contact();
        payload["name"] = json!(name);
        let response = post_json(app.clone(), "/api/contact", payload).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let json = body_json(get(app, "/api/contact/submissions").await).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn listing_storage_failure_returns_500() {
    let app = common::build_test_app(Arc::new(FailingStore), None);
    let response = get(app, "/api/contact/submissions").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["message"], "Internal server error");
}
