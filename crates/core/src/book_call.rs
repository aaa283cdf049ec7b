//! Book-a-call form rules and the catalogue of bookable services.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{non_empty, SubmissionForm};

/// Services a prospect can book a consultation call for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectedService {
    WebsiteDesign,
    AiCustomerSupport,
    AiAppointmentScheduling,
    AiLeadCaptureCrm,
}

impl SelectedService {
    pub const ALL: [SelectedService; 4] = [
        SelectedService::WebsiteDesign,
        SelectedService::AiCustomerSupport,
        SelectedService::AiAppointmentScheduling,
        SelectedService::AiLeadCaptureCrm,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SelectedService::WebsiteDesign => "website-design",
            SelectedService::AiCustomerSupport => "ai-customer-support",
            SelectedService::AiAppointmentScheduling => "ai-appointment-scheduling",
            SelectedService::AiLeadCaptureCrm => "ai-lead-capture-crm",
        }
    }

    fn allowed_list() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SelectedService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown service '{0}'")]
pub struct UnknownService(pub String);

impl FromStr for SelectedService {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|svc| svc.as_str() == s)
            .ok_or_else(|| UnknownService(s.to_string()))
    }
}

fn validate_service(value: &str) -> Result<(), validator::ValidationError> {
    match value.parse::<SelectedService>() {
        Ok(_) => Ok(()),
        Err(_) => Err(validator::ValidationError::new("enum").with_message(Cow::Owned(format!(
            "Selected service '{value}' is not one of: {}",
            SelectedService::allowed_list()
        )))),
    }
}

/// Raw book-a-call form.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookCallForm {
    #[validate(
        required(message = "Name is required"),
        length(min = 2, message = "Name must be at least 2 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Email is required"),
        email(message = "Email is not a valid email address")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "Company is required"),
        length(min = 2, message = "Company name must be at least 2 characters")
    )]
    pub company: Option<String>,
    #[validate(
        required(message = "Please select a service"),
        custom(function = "validate_service")
    )]
    pub selected_service: Option<String>,
    #[validate(
        required(message = "Problems description is required"),
        length(min = 10, message = "Please describe your problems (at least 10 characters)")
    )]
    pub problems: Option<String>,
    pub additional_info: Option<String>,
}

/// A validated booking request, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookCallSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub selected_service: SelectedService,
    pub problems: String,
    pub additional_info: Option<String>,
}

impl SubmissionForm for BookCallForm {
    type Output = NewBookCallSubmission;

    fn into_output(self) -> NewBookCallSubmission {
        let selected_service = self
            .selected_service
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(SelectedService::WebsiteDesign);
        NewBookCallSubmission {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            selected_service,
            problems: self.problems.unwrap_or_default(),
            additional_info: non_empty(self.additional_info),
        }
    }
}
