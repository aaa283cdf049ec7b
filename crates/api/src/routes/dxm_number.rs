//! Mounted at `/dxm-number` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::dxm_number;
use crate::state::AppState;

/// ```text
/// POST   /               -> submit_dxm_number
/// GET    /submissions    -> list_dxm_numbers
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(dxm_number::submit_dxm_number))
        .route("/submissions", get(dxm_number::list_dxm_numbers))
}
