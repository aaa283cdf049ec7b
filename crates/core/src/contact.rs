//! Contact form rules.

use serde::Deserialize;
use validator::Validate;

use crate::validation::{non_empty, SubmissionForm};

/// Minimum length of the free-text message (characters).
pub const MIN_MESSAGE_LENGTH: u64 = 10;

/// Raw contact form as posted by the site.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name is required")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Email is required"),
        email(message = "Email is not a valid email address")
    )]
    pub email: Option<String>,
    pub company: Option<String>,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    #[validate(
        required(message = "Message is required"),
        length(min = 10, message = "Message must be at least 10 characters")
    )]
    pub message: Option<String>,
}

/// A validated contact submission, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub message: String,
}

impl SubmissionForm for ContactForm {
    type Output = NewContactSubmission;

    fn into_output(self) -> NewContactSubmission {
        NewContactSubmission {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            company: non_empty(self.company),
            project_type: non_empty(self.project_type),
            budget: non_empty(self.budget),
            message: self.message.unwrap_or_default(),
        }
    }
}
