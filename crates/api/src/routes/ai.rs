//! Mounted at `/ai` by `api_routes()`.
//!
//! The web client posts to the `analyze-*` spellings; both are served.

use axum::routing::post;
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// ```text
/// POST   /analyse-text       -> analyze_text
/// POST   /analyze-text       -> analyze_text
/// POST   /generate-content   -> generate_content
/// POST   /analyse-business   -> analyze_business
/// POST   /analyze-business   -> analyze_business
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analyse-text", post(ai::analyze_text))
        .route("/analyze-text", post(ai::analyze_text))
        .route("/generate-content", post(ai::generate_content))
        .route("/analyse-business", post(ai::analyze_business))
        .route("/analyze-business", post(ai::analyze_business))
}
