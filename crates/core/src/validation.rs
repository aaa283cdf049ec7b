//! Field-level validation results shared by every submission form.
//!
//! Forms derive [`validator::Validate`]; this module turns the resulting
//! [`validator::ValidationErrors`] into a flat, deterministic list of
//! [`FieldViolation`]s that the HTTP layer can serialize as-is.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

/// Field name used when the payload as a whole cannot be read.
pub const BODY_FIELD: &str = "body";

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Wire name of the offending field (camelCase).
    pub field: String,
    /// Machine-readable rule identifier (`required`, `email`, `length`, ...).
    pub code: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Caller-supplied data violated one or more field constraints.
///
/// Always carries at least one violation. Violations are sorted by field
/// name so responses are stable across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(mut violations: Vec<FieldViolation>) -> Self {
        violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        Self { violations }
    }

    pub fn single(field: &str, code: &str, message: impl Into<String>) -> Self {
        Self::new(vec![FieldViolation::new(field, code, message)])
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.violations
    }

    /// Whether any violation concerns `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        write!(f, "Validation failed: {}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut violations = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            let field = to_camel_case(&field);
            for err in field_errors.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                violations.push(FieldViolation::new(field.clone(), err.code.to_string(), message));
            }
        }
        Self::new(violations)
    }
}

/// A raw submission form: every field optional on the wire, constraints
/// declared through `#[validate(...)]`.
pub trait SubmissionForm: DeserializeOwned + Validate {
    /// The strongly-typed record produced once all rules pass.
    type Output;

    /// Convert into the typed record. Only called after `validate()`
    /// succeeded, so required fields are known to be present.
    fn into_output(self) -> Self::Output;
}

/// Deserialize an untyped JSON payload into a form, run its rules, and
/// return the typed record.
///
/// Unknown fields are dropped by serde. A payload that is not an object, or
/// a field of the wrong JSON type, yields a single violation on
/// [`BODY_FIELD`] instead of a framework rejection.
pub fn parse_form<F: SubmissionForm>(payload: serde_json::Value) -> Result<F::Output, ValidationError> {
    // serde would otherwise map a JSON array onto the struct by position.
    if !payload.is_object() {
        return Err(ValidationError::single(
            BODY_FIELD,
            "invalid_type",
            "Malformed payload: expected a JSON object",
        ));
    }
    let form: F = serde_json::from_value(payload).map_err(|e| {
        ValidationError::single(BODY_FIELD, "invalid_type", format!("Malformed payload: {e}"))
    })?;
    form.validate()?;
    Ok(form.into_output())
}

/// Extract a required, non-blank string field from an untyped payload.
pub fn require_text(
    payload: &serde_json::Value,
    field: &str,
    message: &str,
) -> Result<String, ValidationError> {
    match payload.get(field).and_then(serde_json::Value::as_str) {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => Err(ValidationError::single(field, "required", message)),
    }
}

/// Empty optional strings are stored as absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
