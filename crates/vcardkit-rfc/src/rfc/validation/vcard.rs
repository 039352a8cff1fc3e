//! ## Summary
//! Structural validation for vCard 4.0 documents (RFC 6350 §6).
//!
//! Three rules are checked, in order, and the first violation is reported:
//! 1. `BEGIN`, `VERSION`, `FN` and `END` are present.
//! 2. Every present property satisfies its [`Cardinality`].
//! 3. `BEGIN`/`END` carry `VCARD` and, unless disabled, `VERSION` carries `4.0`.
//!
//! Value content beyond these markers is not inspected.

use std::collections::BTreeMap;

use thiserror::Error;
use vcardkit_core::constants::{VCARD_DELIMITER_VALUE, VCARD_VERSION};

use crate::rfc::vcard::core::{Cardinality, Property};

/// Tunables for [`validate_properties`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Reject documents whose `VERSION` is not `4.0`.
    pub enforce_version: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            enforce_version: true,
        }
    }
}

/// A rule violated by an accumulated property map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required property: {0}")]
    MissingRequiredProperty(Property),

    #[error("invalid value for {property}: expected {expected:?}, found {found:?}")]
    InvalidRequiredValue {
        property: Property,
        expected: &'static str,
        found: String,
    },

    #[error("cardinality violation for {property}: expected {cardinality}, found {count}")]
    CardinalityViolation {
        property: Property,
        cardinality: Cardinality,
        count: usize,
    },
}

impl ValidationError {
    #[must_use]
    pub const fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::MissingRequiredProperty(_) => ValidationErrorKind::MissingRequiredProperty,
            Self::InvalidRequiredValue { .. } => ValidationErrorKind::InvalidRequiredValue,
            Self::CardinalityViolation { .. } => ValidationErrorKind::CardinalityViolation,
        }
    }

    /// The property the violated rule applies to.
    #[must_use]
    pub const fn property(&self) -> Property {
        match self {
            Self::MissingRequiredProperty(property)
            | Self::InvalidRequiredValue { property, .. }
            | Self::CardinalityViolation { property, .. } => *property,
        }
    }
}

/// The kind of validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// A required property has no value.
    MissingRequiredProperty,
    /// A required property has the wrong value.
    InvalidRequiredValue,
    /// A property occurs more or fewer times than allowed.
    CardinalityViolation,
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredProperty => write!(f, "missing required property"),
            Self::InvalidRequiredValue => write!(f, "invalid required value"),
            Self::CardinalityViolation => write!(f, "cardinality violation"),
        }
    }
}

/// ## Summary
/// Validates an accumulated property map.
///
/// ## Errors
/// Returns the first violated rule, checking presence, then cardinality, then
/// required values.
pub fn validate_properties(
    properties: &BTreeMap<Property, Vec<String>>,
    options: &ValidationOptions,
) -> Result<(), ValidationError> {
    for property in Property::REQUIRED {
        if properties.get(&property).is_none_or(Vec::is_empty) {
            return Err(ValidationError::MissingRequiredProperty(property));
        }
    }

    for (property, values) in properties {
        let cardinality = property.cardinality();
        if !cardinality.allows(values.len()) {
            return Err(ValidationError::CardinalityViolation {
                property: *property,
                cardinality,
                count: values.len(),
            });
        }
    }

    check_required_value(properties, Property::Begin, VCARD_DELIMITER_VALUE)?;
    check_required_value(properties, Property::End, VCARD_DELIMITER_VALUE)?;
    if options.enforce_version {
        check_required_value(properties, Property::Version, VCARD_VERSION)?;
    }

    Ok(())
}

/// Compares case-sensitively after trimming surrounding whitespace; stored values are untouched.
fn check_required_value(
    properties: &BTreeMap<Property, Vec<String>>,
    property: Property,
    expected: &'static str,
) -> Result<(), ValidationError> {
    let values = properties.get(&property).map(Vec::as_slice).unwrap_or_default();

    match values.iter().find(|value| value.trim() != expected) {
        Some(found) => Err(ValidationError::InvalidRequiredValue {
            property,
            expected,
            found: found.clone(),
        }),
        None => Ok(()),
    }
}
