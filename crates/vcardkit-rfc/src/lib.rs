//! vCard 4.0 (RFC 6350) parsing and structural validation.
//!
//! [`rfc::vcard`] turns raw vCard text into an immutable [`rfc::vcard::VCard`],
//! and [`rfc::validation`] holds the rules a document must satisfy before it is
//! handed out.

pub mod rfc;
