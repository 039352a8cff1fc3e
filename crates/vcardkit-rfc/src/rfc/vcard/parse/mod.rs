//! vCard parsing (RFC 6350).
//!
//! This module provides parsing functionality for vCard documents.
//!
//! ## Usage
//!
//! ```rust
//! use vcardkit_rfc::rfc::vcard::{Property, parse};
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let card = parse(input).unwrap();
//! assert_eq!(card.get(Property::FormattedName), ["John Doe"]);
//! ```
//!
//! ## Behavior
//!
//! - Lines split at the first `:` or `;`; the rest is the raw value
//! - Unknown, extension and malformed lines are ignored
//! - `\n` and `\r\n` line endings are both accepted
//! - Values are neither unfolded nor unescaped

mod error;
mod lexer;
mod parser;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, content_lines, parse_content_line, split_line, trim_line_ending};
pub use parser::{
    ParseOptions, parse, parse_file, parse_file_with, parse_reader, parse_reader_with, parse_with,
};
