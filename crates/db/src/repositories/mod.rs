//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and issue exactly one statement.

pub mod book_call_submission_repo;
pub mod contact_submission_repo;
pub mod dxm_number_repo;
pub mod user_repo;

pub use book_call_submission_repo::BookCallSubmissionRepo;
pub use contact_submission_repo::ContactSubmissionRepo;
pub use dxm_number_repo::DxmNumberRepo;
pub use user_repo::UserRepo;
