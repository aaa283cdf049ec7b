use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dxm_ai::GatewayError;
use dxm_core::error::CoreError;
use dxm_core::validation::{FieldViolation, ValidationError};
use dxm_db::StorageError;

use crate::response::ErrorResponse;

/// Message returned for any storage failure. Details stay in the logs.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Application-level error type for HTTP handlers.
///
/// Every variant is logged once here, at the point it becomes a response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `dxm_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A submission form failed validation. `message` is the
    /// endpoint-specific summary, e.g. "Invalid form data".
    #[error("{message}: {source}")]
    InvalidForm {
        message: &'static str,
        #[source]
        source: ValidationError,
    },

    /// The persistence medium failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The external AI gateway failed or was unreachable.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl AppError {
    pub fn invalid_form(message: &'static str, source: ValidationError) -> Self {
        AppError::InvalidForm { message, source }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

fn bad_request(message: String, violations: Vec<FieldViolation>) -> (StatusCode, ErrorResponse) {
    tracing::warn!(
        %message,
        fields = ?violations.iter().map(|v| v.field.as_str()).collect::<Vec<_>>(),
        "Rejected invalid request",
    );
    (
        StatusCode::BAD_REQUEST,
        ErrorResponse::with_errors(message, violations),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Core(CoreError::Validation(err)) => {
                let message = err
                    .violations()
                    .first()
                    .map(|v| v.message.clone())
                    .unwrap_or_else(|| "Invalid request data".to_string());
                bad_request(message, err.into_violations())
            }
            AppError::Core(CoreError::Configuration(msg)) => {
                tracing::error!(error = %msg, "Configuration error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(msg))
            }
            AppError::InvalidForm { message, source } => {
                bad_request(message.to_string(), source.into_violations())
            }
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(INTERNAL_SERVER_ERROR),
                )
            }
            AppError::Gateway(err) => {
                tracing::error!(error = %err, "AI gateway error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(err.to_string()),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
