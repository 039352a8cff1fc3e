//! vCard parse error types.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::rfc::validation::vcard::{ValidationError, ValidationErrorKind};
use crate::rfc::vcard::core::Property;

/// Result type for vCard parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred while parsing a vCard.
///
/// Malformed or unknown lines never produce an error; only a failed
/// validation of the whole document or a failed read does.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read line {line}: {source}")]
    Io {
        /// Line number where reading failed (1-based).
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        match self {
            Self::Validation(err) => ParseErrorKind::Validation(err.kind()),
            Self::Open { .. } | Self::Io { .. } => ParseErrorKind::Io,
        }
    }

    /// Returns the validation failure, if that is what stopped the parse.
    #[must_use]
    pub const fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Open { .. } | Self::Io { .. } => None,
        }
    }

    /// Returns the property the failure refers to, if any.
    #[must_use]
    pub fn property(&self) -> Option<Property> {
        self.validation().map(ValidationError::property)
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The document was read but failed validation.
    Validation(ValidationErrorKind),
    /// The input could not be opened, read or decoded as UTF-8.
    Io,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(kind) => write!(f, "{kind}"),
            Self::Io => write!(f, "read error"),
        }
    }
}
