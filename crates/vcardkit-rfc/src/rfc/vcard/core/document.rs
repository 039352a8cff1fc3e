//! The validated vCard document and its builder.

use std::collections::BTreeMap;

use serde::Serialize;

use super::property::Property;
use crate::rfc::validation::vcard::{ValidationError, ValidationOptions, validate_properties};
use crate::rfc::vcard::parse::ContentLine;

/// A validated vCard 4.0 document.
///
/// Maps each present property to its raw values in input order. A `VCard` can
/// only be obtained from [`VCardBuilder::build`], so every instance satisfies the
/// required-property, required-value and cardinality rules; it is never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VCard {
    properties: BTreeMap<Property, Vec<String>>,
}

impl VCard {
    /// Returns the raw values of a property, in input order.
    ///
    /// Absent properties yield an empty slice.
    #[must_use]
    pub fn get(&self, property: Property) -> &[String] {
        self.properties
            .get(&property)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the first raw value of a property.
    #[must_use]
    pub fn first(&self, property: Property) -> Option<&str> {
        self.get(property).first().map(String::as_str)
    }

    /// Returns whether the document holds at least one value for the property.
    #[must_use]
    pub fn contains(&self, property: Property) -> bool {
        self.properties.contains_key(&property)
    }

    /// Iterates present properties in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Property, &[String])> {
        self.properties
            .iter()
            .map(|(property, values)| (*property, values.as_slice()))
    }

    /// Number of distinct properties present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Always `false` for a validated document; provided for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Accumulates property values and validates them into a [`VCard`].
#[derive(Debug, Clone, Default)]
pub struct VCardBuilder {
    properties: BTreeMap<Property, Vec<String>>,
    dropped: usize,
}

impl VCardBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value to a property, keeping encounter order.
    pub fn append(&mut self, property: Property, value: impl Into<String>) -> &mut Self {
        self.properties
            .entry(property)
            .or_default()
            .push(value.into());
        self
    }

    /// Appends a parsed line; lines that matched no known property are dropped.
    pub fn push(&mut self, line: ContentLine<'_>) -> &mut Self {
        match line.property {
            Some(property) => self.append(property, line.value),
            None => {
                tracing::trace!(name = %line.name, "Dropping line with unknown property");
                self.dropped += 1;
                self
            }
        }
    }

    /// Number of lines dropped because their property was unknown.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Validates the accumulated properties and freezes them into a document.
    ///
    /// ## Errors
    /// Returns the first rule the accumulated properties violate.
    pub fn build(self, options: &ValidationOptions) -> Result<VCard, ValidationError> {
        validate_properties(&self.properties, options)?;

        tracing::debug!(
            properties = self.properties.len(),
            dropped = self.dropped,
            "vCard validated"
        );

        Ok(VCard {
            properties: self.properties,
        })
    }
}

impl Extend<(Property, String)> for VCardBuilder {
    fn extend<T: IntoIterator<Item = (Property, String)>>(&mut self, iter: T) {
        for (property, value) in iter {
            self.append(property, value);
        }
    }
}
