//! Shared response envelope types for API handlers.
//!
//! Every submission endpoint answers with a `success` flag so the site's
//! forms can branch on one field.

use dxm_core::validation::FieldViolation;
use serde::Serialize;

/// `{ "success": true, "message": ..., "submissionId": ... }` returned by
/// create endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse<Id: Serialize> {
    pub success: bool,
    pub message: &'static str,
    pub submission_id: Id,
}

impl<Id: Serialize> SubmissionResponse<Id> {
    pub fn new(message: &'static str, submission_id: Id) -> Self {
        Self {
            success: true,
            message,
            submission_id,
        }
    }
}

/// `{ "success": true, "data": T }` returned by list endpoints.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": false, "message": ..., "errors"?: [...] }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(message: impl Into<String>, errors: Vec<FieldViolation>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Some(errors),
        }
    }
}
