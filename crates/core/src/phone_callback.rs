//! Phone-callback ("DXM number") rules.
//!
//! The voice widget collects a number in E.164 form so the voice agent can
//! call the prospect back.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::validation::SubmissionForm;

/// `+`, a non-zero country-code digit, then 1 to 14 further digits.
pub const E164_PATTERN: &str = r"^\+[1-9]\d{1,14}$";

static E164_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(E164_PATTERN).expect("E.164 pattern is a valid regex"));

/// Whether `number` is a well-formed E.164 phone number.
pub fn is_e164(number: &str) -> bool {
    E164_RE.is_match(number)
}

/// Raw phone-callback form.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PhoneCallbackForm {
    #[validate(
        required(message = "Phone number is required"),
        regex(
            path = *E164_RE,
            message = "Phone number must be in E.164 format (e.g., +44123456789)"
        )
    )]
    pub phone_number: Option<String>,
}

/// A validated callback request, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPhoneCallback {
    pub phone_number: String,
}

impl SubmissionForm for PhoneCallbackForm {
    type Output = NewPhoneCallback;

    fn into_output(self) -> NewPhoneCallback {
        NewPhoneCallback {
            phone_number: self.phone_number.unwrap_or_default(),
        }
    }
}
