#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use dxm_ai::error::ChatError;
use dxm_ai::{AiGateway, BusinessAnalysis, GatewayError, GeneratedContent, TextAnalysis};
use dxm_core::book_call::NewBookCallSubmission;
use dxm_core::contact::NewContactSubmission;
use dxm_core::phone_callback::NewPhoneCallback;
use dxm_core::user::NewUser;
use dxm_db::models::book_call_submission::BookCallSubmission;
use dxm_db::models::contact_submission::ContactSubmission;
use dxm_db::models::dxm_number::PhoneCallbackRequest;
use dxm_db::models::user::User;
use dxm_db::store::{MemStore, StoreBackend, SubmissionStore};
use dxm_db::StorageError;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use dxm_api::config::ServerConfig;
use dxm_api::router::build_app_router;
use dxm_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. No database, no AI key.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        ai: None,
    }
}

/// Build the full application router over the given store and gateway.
///
/// Goes through `build_app_router` so tests exercise the same middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery) as production.
pub fn build_test_app(store: Arc<dyn SubmissionStore>, ai: Option<Arc<dyn AiGateway>>) -> Router {
    build_test_app_with_config(test_config(), store, ai)
}

/// Same as [`build_test_app`] with a caller-tuned config.
pub fn build_test_app_with_config(
    config: ServerConfig,
    store: Arc<dyn SubmissionStore>,
    ai: Option<Arc<dyn AiGateway>>,
) -> Router {
    let state = AppState {
        store,
        ai,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// An app over a fresh in-memory store with no AI gateway.
pub fn mem_app() -> (Router, Arc<dyn SubmissionStore>) {
    let store: Arc<dyn SubmissionStore> = Arc::new(MemStore::new());
    (build_test_app(store.clone(), None), store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// A store whose medium is always unavailable.
pub struct FailingStore;

fn unavailable() -> StorageError {
    StorageError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl SubmissionStore for FailingStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Postgres
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        Err(unavailable())
    }

    async fn create_user(&self, _input: &NewUser) -> Result<User, StorageError> {
        Err(unavailable())
    }

    async fn find_user(&self, _id: Uuid) -> Result<Option<User>, StorageError> {
        Err(unavailable())
    }

    async fn find_user_by_username(&self, _username: &str) -> Result<Option<User>, StorageError> {
        Err(unavailable())
    }

    async fn create_contact_submission(
        &self,
        _input: &NewContactSubmission,
    ) -> Result<ContactSubmission, StorageError> {
        Err(unavailable())
    }

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StorageError> {
        Err(unavailable())
    }

    async fn create_book_call_submission(
        &self,
        _input: &NewBookCallSubmission,
    ) -> Result<BookCallSubmission, StorageError> {
        Err(unavailable())
    }

    async fn list_book_call_submissions(&self) -> Result<Vec<BookCallSubmission>, StorageError> {
        Err(unavailable())
    }

    async fn create_phone_callback(
        &self,
        _input: &NewPhoneCallback,
    ) -> Result<PhoneCallbackRequest, StorageError> {
        Err(unavailable())
    }

    async fn list_phone_callbacks(&self) -> Result<Vec<PhoneCallbackRequest>, StorageError> {
        Err(unavailable())
    }
}

/// Gateway that answers every call with a fixed reply.
pub struct StubGateway;

#[async_trait]
impl AiGateway for StubGateway {
    async fn analyze_text(&self, _text: &str) -> Result<TextAnalysis, GatewayError> {
        Ok(TextAnalysis::from_reply(&serde_json::json!({
            "rating": 4,
            "confidence": 0.9,
            "summary": "Positive feedback",
        })))
    }

    async fn generate_content(&self, prompt: &str) -> Result<GeneratedContent, GatewayError> {
        Ok(GeneratedContent::from_reply(Some(format!("Copy for: {prompt}"))))
    }

    async fn analyze_business(&self, _description: &str) -> Result<BusinessAnalysis, GatewayError> {
        Ok(BusinessAnalysis::from_reply(&serde_json::json!({
            "insights": "Strong local demand",
            "recommendations": ["Add online booking", "Collect reviews"],
        })))
    }
}

/// Gateway whose upstream rejects every request.
pub struct FailingGateway;

fn rejected(action: &'static str) -> GatewayError {
    GatewayError::new(
        action,
        ChatError::Api {
            status: 401,
            body: "invalid api key".to_string(),
        },
    )
}

#[async_trait]
impl AiGateway for FailingGateway {
    async fn analyze_text(&self, _text: &str) -> Result<TextAnalysis, GatewayError> {
        Err(rejected("analyze text"))
    }

    async fn generate_content(&self, _prompt: &str) -> Result<GeneratedContent, GatewayError> {
        Err(rejected("generate content"))
    }

    async fn analyze_business(&self, _description: &str) -> Result<BusinessAnalysis, GatewayError> {
        Err(rejected("analyze business scenario"))
    }
}
