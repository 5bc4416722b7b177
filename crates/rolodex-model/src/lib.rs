#![forbid(unsafe_code)]
//! Contact model SSOT.
//!
//! The persisted [`Contact`], the [`ContactDraft`] field set accepted from
//! either front-end, and the validation rules both controllers share. No I/O
//! lives here.

mod contact;

pub use contact::{validate, Contact, ContactDraft, FieldError, ValidationErrors};

pub const CRATE_NAME: &str = "rolodex-model";
