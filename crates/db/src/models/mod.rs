//! Persisted row types.
//!
//! Each struct is both a `FromRow` target for [`crate::repositories`] and the
//! JSON shape returned by the list endpoints (camelCase on the wire).

pub mod book_call_submission;
pub mod contact_submission;
pub mod dxm_number;
pub mod user;
