//! Mounted at `/contact` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// ```text
/// POST   /               -> submit_contact
/// GET    /submissions    -> list_contact_submissions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(contact::submit_contact))
        .route("/submissions", get(contact::list_contact_submissions))
}
