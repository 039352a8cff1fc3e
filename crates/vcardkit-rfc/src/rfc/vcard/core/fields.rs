//! Typed accessors over [`VCard::get`].
//!
//! Properties whose cardinality allows at most one instance are exposed as
//! `Option<&str>`, the required single-valued ones as `&str`, and everything
//! else as a slice of raw values.

use super::document::VCard;
use super::property::Property;

impl VCard {
    // General

    /// `BEGIN` value; always present on a validated card.
    #[must_use]
    pub fn begin(&self) -> &str {
        self.first(Property::Begin).unwrap_or_default()
    }

    /// `END` value; always present on a validated card.
    #[must_use]
    pub fn end(&self) -> &str {
        self.first(Property::End).unwrap_or_default()
    }

    #[must_use]
    pub fn source(&self) -> &[String] {
        self.get(Property::Source)
    }

    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.first(Property::Kind)
    }

    #[must_use]
    pub fn xml(&self) -> &[String] {
        self.get(Property::Xml)
    }

    // Identification

    /// All `FN` values; at least one on a validated card.
    #[must_use]
    pub fn formatted_name(&self) -> &[String] {
        self.get(Property::FormattedName)
    }

    /// Raw `N` value, components still `;`-separated.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.first(Property::Name)
    }

    #[must_use]
    pub fn nickname(&self) -> &[String] {
        self.get(Property::Nickname)
    }

    #[must_use]
    pub fn photo(&self) -> &[String] {
        self.get(Property::Photo)
    }

    #[must_use]
    pub fn birthday(&self) -> Option<&str> {
        self.first(Property::Birthday)
    }

    #[must_use]
    pub fn anniversary(&self) -> Option<&str> {
        self.first(Property::Anniversary)
    }

    #[must_use]
    pub fn gender(&self) -> Option<&str> {
        self.first(Property::Gender)
    }

    // Delivery addressing

    #[must_use]
    pub fn address(&self) -> &[String] {
        self.get(Property::Address)
    }

    // Communications

    #[must_use]
    pub fn telephone(&self) -> &[String] {
        self.get(Property::Telephone)
    }

    #[must_use]
    pub fn email(&self) -> &[String] {
        self.get(Property::Email)
    }

    #[must_use]
    pub fn impp(&self) -> &[String] {
        self.get(Property::Impp)
    }

    #[must_use]
    pub fn language(&self) -> &[String] {
        self.get(Property::Language)
    }

    // Geographical

    #[must_use]
    pub fn time_zone(&self) -> &[String] {
        self.get(Property::TimeZone)
    }

    #[must_use]
    pub fn geo(&self) -> &[String] {
        self.get(Property::Geo)
    }

    // Organizational

    #[must_use]
    pub fn title(&self) -> &[String] {
        self.get(Property::Title)
    }

    #[must_use]
    pub fn role(&self) -> &[String] {
        self.get(Property::Role)
    }

    #[must_use]
    pub fn logo(&self) -> &[String] {
        self.get(Property::Logo)
    }

    #[must_use]
    pub fn organization(&self) -> &[String] {
        self.get(Property::Organization)
    }

    #[must_use]
    pub fn member(&self) -> &[String] {
        self.get(Property::Member)
    }

    #[must_use]
    pub fn related(&self) -> &[String] {
        self.get(Property::Related)
    }

    // Explanatory

    #[must_use]
    pub fn categories(&self) -> &[String] {
        self.get(Property::Categories)
    }

    #[must_use]
    pub fn note(&self) -> &[String] {
        self.get(Property::Note)
    }

    #[must_use]
    pub fn product_id(&self) -> Option<&str> {
        self.first(Property::ProductId)
    }

    #[must_use]
    pub fn revision(&self) -> Option<&str> {
        self.first(Property::Revision)
    }

    #[must_use]
    pub fn sound(&self) -> &[String] {
        self.get(Property::Sound)
    }

    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.first(Property::Uid)
    }

    #[must_use]
    pub fn client_pid_map(&self) -> &[String] {
        self.get(Property::ClientPidMap)
    }

    #[must_use]
    pub fn url(&self) -> &[String] {
        self.get(Property::Url)
    }

    /// `VERSION` value; always present on a validated card.
    #[must_use]
    pub fn version(&self) -> &str {
        self.first(Property::Version).unwrap_or_default()
    }

    // Security

    #[must_use]
    pub fn key(&self) -> &[String] {
        self.get(Property::Key)
    }

    // Calendar

    #[must_use]
    pub fn busy_calendar_url(&self) -> &[String] {
        self.get(Property::BusyCalendarUrl)
    }

    #[must_use]
    pub fn calendar_user_uri(&self) -> &[String] {
        self.get(Property::CalendarUserUri)
    }

    #[must_use]
    pub fn calendar_uri(&self) -> &[String] {
        self.get(Property::CalendarUri)
    }
}
