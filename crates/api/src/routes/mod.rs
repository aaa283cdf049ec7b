pub mod ai;
pub mod book_call;
pub mod contact;
pub mod dxm_number;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /contact                         submit (POST)
/// /contact/submissions             list (GET)
///
/// /book-call                       submit (POST)
/// /book-call/submissions           list (GET)
///
/// /dxm-number                      submit (POST)
/// /dxm-number/submissions          list (GET)
///
/// /ai/analyse-text                 text sentiment (POST)
/// /ai/generate-content             marketing copy (POST)
/// /ai/analyse-business             business insights (POST)
/// ```
///
/// The `submissions` listings are unauthenticated administrative views.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/contact", contact::router())
        .nest("/book-call", book_call::router())
        .nest("/dxm-number", dxm_number::router())
        .nest("/ai", ai::router())
}
