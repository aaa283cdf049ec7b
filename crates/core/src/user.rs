//! Site user credentials.
//!
//! Users are created through the storage API only; no route exposes them.
//! Passwords are stored as given and there is no verification routine.

/// Input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
