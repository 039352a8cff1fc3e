//! vCard document parser (RFC 6350).
//!
//! Accumulates content lines into a [`VCardBuilder`] and validates the result.
//! The string and reader entry points share line handling, so the same content
//! yields the same document through either.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use vcardkit_core::config::ParserConfig;
use vcardkit_core::types::KeyMatching;

use super::error::{ParseError, ParseResult};
use super::lexer::{content_lines, parse_content_line};
use crate::rfc::validation::vcard::ValidationOptions;
use crate::rfc::vcard::core::{VCard, VCardBuilder};

/// Options shared by every parse entry point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// How property names are matched against registry keys.
    pub key_matching: KeyMatching,
    /// Rules applied once all lines are consumed.
    pub validation: ValidationOptions,
}

impl From<&ParserConfig> for ParseOptions {
    fn from(config: &ParserConfig) -> Self {
        Self {
            key_matching: config.key_matching,
            validation: ValidationOptions {
                enforce_version: config.enforce_version,
            },
        }
    }
}

/// Parses a vCard document from a string with default options.
///
/// ## Errors
///
/// Returns an error if the accumulated properties fail validation.
pub fn parse(input: &str) -> ParseResult<VCard> {
    parse_with(input, &ParseOptions::default())
}

/// Parses a vCard document from a string.
///
/// ## Errors
///
/// Returns an error if the accumulated properties fail validation.
#[tracing::instrument(skip(input, options), fields(input_len = input.len(), key_matching = %options.key_matching))]
pub fn parse_with(input: &str, options: &ParseOptions) -> ParseResult<VCard> {
    tracing::debug!("Parsing vCard document");

    let mut builder = VCardBuilder::new();
    for line in content_lines(input, options.key_matching) {
        builder.push(line);
    }

    finish(builder, options)
}

/// Parses a vCard document line by line from a buffered reader with default options.
///
/// ## Errors
///
/// Returns an error if reading fails, the input is not UTF-8, or the
/// accumulated properties fail validation.
pub fn parse_reader<R: BufRead>(reader: R) -> ParseResult<VCard> {
    parse_reader_with(reader, &ParseOptions::default())
}

/// Parses a vCard document line by line from a buffered reader.
///
/// Only one line is held in memory at a time.
///
/// ## Errors
///
/// Returns an error if reading fails, the input is not UTF-8, or the
/// accumulated properties fail validation.
#[tracing::instrument(skip(reader, options), fields(key_matching = %options.key_matching))]
pub fn parse_reader_with<R: BufRead>(mut reader: R, options: &ParseOptions) -> ParseResult<VCard> {
    tracing::debug!("Parsing vCard stream");

    let mut builder = VCardBuilder::new();
    let mut buf = String::new();
    let mut line_num = 0;

    loop {
        buf.clear();
        line_num += 1;

        let read = reader
            .read_line(&mut buf)
            .map_err(|source| ParseError::Io {
                line: line_num,
                source,
            })?;
        if read == 0 {
            break;
        }

        if let Some(line) = parse_content_line(&buf, options.key_matching) {
            builder.push(line);
        }
    }

    tracing::trace!(lines = line_num - 1, "Stream consumed");

    finish(builder, options)
}

/// Opens and parses a vCard file with default options.
///
/// ## Errors
///
/// Returns an error if the file cannot be opened or read, or the document
/// fails validation.
pub fn parse_file<P: AsRef<Path>>(path: P) -> ParseResult<VCard> {
    parse_file_with(path, &ParseOptions::default())
}

/// Opens and parses a vCard file, streaming it line by line.
///
/// ## Errors
///
/// Returns an error if the file cannot be opened or read, or the document
/// fails validation.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn parse_file_with<P: AsRef<Path>>(path: P, options: &ParseOptions) -> ParseResult<VCard> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    parse_reader_with(BufReader::new(file), options)
}

fn finish(builder: VCardBuilder, options: &ParseOptions) -> ParseResult<VCard> {
    builder
        .build(&options.validation)
        .inspect_err(|err| tracing::warn!(error = %err, "vCard failed validation"))
        .map_err(ParseError::from)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::rfc::vcard::core::Property;

    const VALID: &str = "BEGIN:VCARD\nVERSION:4.0\nFN:John Doe\nEMAIL:a@x.com\nEMAIL:b@x.com\nEND:VCARD";

    #[test_log::test]
    fn parse_valid_document() {
        let card = parse(VALID).unwrap();

        assert_eq!(card.get(Property::FormattedName), ["John Doe"]);
        assert_eq!(card.get(Property::Email), ["a@x.com", "b@x.com"]);
    }

    #[test]
    fn reader_matches_string() {
        let inputs = [
            VALID,
            "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Doe\r\nEND:VCARD\r\n",
            "BEGIN:VCARD\nVERSION:4.0\r\nFN:John Doe\nNOTE:trailing cr\r\nEND:VCARD\r",
        ];

        for input in inputs {
            let from_str = parse(input).unwrap();
            let from_reader = parse_reader(Cursor::new(input.as_bytes())).unwrap();
            assert_eq!(from_str, from_reader, "{input:?}");
        }
    }

    #[test]
    fn reader_reports_invalid_utf8_with_line() {
        let mut bytes = b"BEGIN:VCARD\nVERSION:4.0\nFN:".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b"\nEND:VCARD\n");

        let err = parse_reader(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, ParseError::Io { line: 3, .. }), "{err:?}");
    }

    #[test]
    fn options_from_config() {
        let config = ParserConfig {
            key_matching: KeyMatching::CaseSensitive,
            enforce_version: false,
        };

        let options = ParseOptions::from(&config);
        assert_eq!(options.key_matching, KeyMatching::CaseSensitive);
        assert!(!options.validation.enforce_version);
    }

    #[test]
    fn case_sensitive_option_drops_lowercase_lines() {
        let input = "BEGIN:VCARD\nVERSION:4.0\nfn:lower\nFN:Upper\nEND:VCARD";
        let options = ParseOptions {
            key_matching: KeyMatching::CaseSensitive,
            ..ParseOptions::default()
        };

        let strict = parse_with(input, &options).unwrap();
        assert_eq!(strict.get(Property::FormattedName), ["Upper"]);

        let lenient = parse(input).unwrap();
        assert_eq!(lenient.get(Property::FormattedName), ["lower", "Upper"]);
    }

    #[test]
    fn missing_file_is_open_error() {
        let err = parse_file("/nonexistent/definitely/missing.vcf").unwrap_err();
        assert!(matches!(err, ParseError::Open { .. }), "{err:?}");
    }
}
