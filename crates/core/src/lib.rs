//! Domain types and validation rules for the DXM site backend.
//!
//! Everything here is pure logic with no I/O: submission forms, their
//! validated counterparts, and the error types shared by the storage and
//! HTTP layers.

pub mod book_call;
pub mod contact;
pub mod error;
pub mod phone_callback;
pub mod types;
pub mod user;
pub mod validation;
