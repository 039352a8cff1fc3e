//! Validation logic for RFC compliance.
//!
//! This module provides the structural rules a vCard must satisfy before a
//! [`crate::rfc::vcard::VCard`] is constructed.

pub mod vcard;

pub use vcard::{ValidationError, ValidationErrorKind, ValidationOptions, validate_properties};
