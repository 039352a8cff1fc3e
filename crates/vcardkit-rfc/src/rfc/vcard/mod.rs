//! vCard implementation (RFC 6350).
//!
//! This module converts raw vCard 4.0 text into a validated, immutable
//! [`VCard`] that can be queried by [`Property`].
//!
//! ## Overview
//!
//! Parsing happens in two stages. The line parser splits every input line at
//! its first `:` or `;` and looks the name up in the fixed property registry;
//! lines naming no known property are dropped. The [`VCardBuilder`] then
//! accumulates values per property and validates the result once:
//!
//! - `BEGIN`, `VERSION`, `FN` and `END` must be present
//! - every property must respect its [`Cardinality`]
//! - `BEGIN`/`END` must be `VCARD` and `VERSION` must be `4.0`
//!
//! ## Usage
//!
//! ```rust
//! use vcardkit_rfc::rfc::vcard::{Property, parse};
//!
//! let input = "BEGIN:VCARD\nVERSION:4.0\nFN:John Doe\nEMAIL:a@x.com\nEMAIL:b@x.com\nEND:VCARD";
//!
//! let card = parse(input).unwrap();
//! assert_eq!(card.formatted_name(), ["John Doe"]);
//! assert_eq!(card.get(Property::Email), ["a@x.com", "b@x.com"]);
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Registry, cardinality table and document types
//! - [`parse`] - Line parser, entry points and error types

pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use self::core::{Cardinality, Category, Property, UnknownProperty, VCard, VCardBuilder};
pub use parse::{
    ParseError, ParseErrorKind, ParseOptions, ParseResult, parse, parse_file, parse_file_with,
    parse_reader, parse_reader_with, parse_with,
};
