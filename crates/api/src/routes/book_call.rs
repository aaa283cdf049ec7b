//! Mounted at `/book-call` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::book_call;
use crate::state::AppState;

/// ```text
/// POST   /               -> submit_book_call
/// GET    /submissions    -> list_book_call_submissions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(book_call::submit_book_call))
        .route("/submissions", get(book_call::list_book_call_submissions))
}
