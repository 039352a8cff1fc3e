//! vCard core models (RFC 6350).
//!
//! The property registry and its cardinality table are process-wide
//! constants; [`VCard`] is the only runtime data structure.

mod cardinality;
mod document;
mod fields;
mod property;

pub use cardinality::Cardinality;
pub use document::{VCard, VCardBuilder};
pub use property::{Category, Property, UnknownProperty};
