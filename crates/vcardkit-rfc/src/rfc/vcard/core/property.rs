//! vCard property registry (RFC 6350 §6).
//!
//! The set of known properties is closed: every variant of [`Property`] carries
//! its wire key, its [`Category`] and its [`Cardinality`] through `const`
//! lookups, so the registry needs no runtime initialization.

use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;
use vcardkit_core::types::KeyMatching;

use super::cardinality::Cardinality;

/// RFC 6350 §6 property grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// BEGIN/END markers and document-level metadata (§6.1).
    General,
    /// Naming and identification of the entity (§6.2).
    Identification,
    /// Postal delivery information (§6.3).
    DeliveryAddressing,
    /// Ways of communicating with the entity (§6.4).
    Communications,
    /// Time zones and positions (§6.5).
    Geographical,
    /// Organizations and roles (§6.6).
    Organizational,
    /// Notes, revisions and identifiers (§6.7).
    Explanatory,
    /// Keys and certificates (§6.8).
    Security,
    /// Calendar and scheduling URIs (§6.9, RFC 2739).
    Calendar,
}

impl Category {
    /// Every category, in registry order.
    pub const ALL: [Self; 9] = [
        Self::General,
        Self::Identification,
        Self::DeliveryAddressing,
        Self::Communications,
        Self::Geographical,
        Self::Organizational,
        Self::Explanatory,
        Self::Security,
        Self::Calendar,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Identification => "identification",
            Self::DeliveryAddressing => "delivery-addressing",
            Self::Communications => "communications",
            Self::Geographical => "geographical",
            Self::Organizational => "organizational",
            Self::Explanatory => "explanatory",
            Self::Security => "security",
            Self::Calendar => "calendar",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A known vCard property.
///
/// Declaration order is registry order; the derived `Ord` relies on it so that
/// documents list their properties deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    // General
    Begin,
    End,
    Source,
    Kind,
    Xml,

    // Identification
    FormattedName,
    Name,
    Nickname,
    Photo,
    Birthday,
    Anniversary,
    Gender,

    // Delivery addressing
    Address,

    // Communications
    Telephone,
    Email,
    Impp,
    Language,

    // Geographical
    TimeZone,
    Geo,

    // Organizational
    Title,
    Role,
    Logo,
    Organization,
    Member,
    Related,

    // Explanatory
    Categories,
    Note,
    ProductId,
    Revision,
    Sound,
    Uid,
    ClientPidMap,
    Url,
    Version,

    // Security
    Key,

    // Calendar
    BusyCalendarUrl,
    CalendarUserUri,
    CalendarUri,
}

impl Property {
    /// Every known property, in registry order.
    pub const ALL: [Self; 38] = [
        Self::Begin,
        Self::End,
        Self::Source,
        Self::Kind,
        Self::Xml,
        Self::FormattedName,
        Self::Name,
        Self::Nickname,
        Self::Photo,
        Self::Birthday,
        Self::Anniversary,
        Self::Gender,
        Self::Address,
        Self::Telephone,
        Self::Email,
        Self::Impp,
        Self::Language,
        Self::TimeZone,
        Self::Geo,
        Self::Title,
        Self::Role,
        Self::Logo,
        Self::Organization,
        Self::Member,
        Self::Related,
        Self::Categories,
        Self::Note,
        Self::ProductId,
        Self::Revision,
        Self::Sound,
        Self::Uid,
        Self::ClientPidMap,
        Self::Url,
        Self::Version,
        Self::Key,
        Self::BusyCalendarUrl,
        Self::CalendarUserUri,
        Self::CalendarUri,
    ];

    /// Properties every document must carry, in the order they are checked.
    pub const REQUIRED: [Self; 4] = [Self::Begin, Self::Version, Self::FormattedName, Self::End];

    /// Returns the wire key (uppercase) for this property.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Begin => "BEGIN",
            Self::End => "END",
            Self::Source => "SOURCE",
            Self::Kind => "KIND",
            Self::Xml => "XML",
            Self::FormattedName => "FN",
            Self::Name => "N",
            Self::Nickname => "NICKNAME",
            Self::Photo => "PHOTO",
            Self::Birthday => "BDAY",
            Self::Anniversary => "ANNIVERSARY",
            Self::Gender => "GENDER",
            Self::Address => "ADR",
            Self::Telephone => "TEL",
            Self::Email => "EMAIL",
            Self::Impp => "IMPP",
            Self::Language => "LANG",
            Self::TimeZone => "TZ",
            Self::Geo => "GEO",
            Self::Title => "TITLE",
            Self::Role => "ROLE",
            Self::Logo => "LOGO",
            Self::Organization => "ORG",
            Self::Member => "MEMBER",
            Self::Related => "RELATED",
            Self::Categories => "CATEGORIES",
            Self::Note => "NOTE",
            Self::ProductId => "PRODID",
            Self::Revision => "REV",
            Self::Sound => "SOUND",
            Self::Uid => "UID",
            Self::ClientPidMap => "CLIENTPIDMAP",
            Self::Url => "URL",
            Self::Version => "VERSION",
            Self::Key => "KEY",
            Self::BusyCalendarUrl => "FBURL",
            Self::CalendarUserUri => "CALADRURI",
            Self::CalendarUri => "CALURI",
        }
    }

    /// Returns the RFC 6350 category this property belongs to.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Begin | Self::End | Self::Source | Self::Kind | Self::Xml => Category::General,
            Self::FormattedName
            | Self::Name
            | Self::Nickname
            | Self::Photo
            | Self::Birthday
            | Self::Anniversary
            | Self::Gender => Category::Identification,
            Self::Address => Category::DeliveryAddressing,
            Self::Telephone | Self::Email | Self::Impp | Self::Language => {
                Category::Communications
            }
            Self::TimeZone | Self::Geo => Category::Geographical,
            Self::Title
            | Self::Role
            | Self::Logo
            | Self::Organization
            | Self::Member
            | Self::Related => Category::Organizational,
            Self::Categories
            | Self::Note
            | Self::ProductId
            | Self::Revision
            | Self::Sound
            | Self::Uid
            | Self::ClientPidMap
            | Self::Url
            | Self::Version => Category::Explanatory,
            Self::Key => Category::Security,
            Self::BusyCalendarUrl | Self::CalendarUserUri | Self::CalendarUri => {
                Category::Calendar
            }
        }
    }

    /// Returns how many instances of this property a single document may hold.
    #[must_use]
    pub const fn cardinality(self) -> Cardinality {
        match self {
            Self::Begin | Self::End | Self::Version => Cardinality::ExactlyOne,
            Self::FormattedName => Cardinality::OneOrMore,
            Self::Kind
            | Self::Name
            | Self::Birthday
            | Self::Anniversary
            | Self::Gender
            | Self::ProductId
            | Self::Revision
            | Self::Uid => Cardinality::AtMostOne,
            _ => Cardinality::ZeroOrMore,
        }
    }

    /// Returns whether every document must contain this property.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(
            self,
            Self::Begin | Self::Version | Self::FormattedName | Self::End
        )
    }

    /// Looks up the property whose key matches `name` under the given policy.
    ///
    /// Returns `None` for extension (`X-`) and otherwise unknown names.
    #[must_use]
    pub fn from_key(name: &str, matching: KeyMatching) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|property| matching.matches(name, property.key()))
    }

    /// Iterates the properties of one category, in registry order.
    pub fn in_category(category: Category) -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(move |property| property.category() == category)
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a string names no known property.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown vCard property: {0}")]
pub struct UnknownProperty(pub String);

impl FromStr for Property {
    type Err = UnknownProperty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s.trim(), KeyMatching::CaseInsensitive)
            .ok_or_else(|| UnknownProperty(s.to_string()))
    }
}

impl Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}
