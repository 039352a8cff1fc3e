//! vCard line splitting.
//!
//! Each physical line is split once, at the first `:` or `;`. Everything after
//! that separator, further separators included, is the raw value. No unfolding
//! or unescaping is performed.

use vcardkit_core::types::KeyMatching;

use crate::rfc::vcard::core::Property;

/// A split input line before accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLine<'a> {
    /// Matched registry entry, `None` for unknown or extension names.
    pub property: Option<Property>,
    /// Name as it appeared on the line.
    pub name: &'a str,
    /// Raw value.
    pub value: &'a str,
}

/// Strips one trailing `\n` and then one trailing `\r`.
#[must_use]
pub fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Splits a line at its first `:` or `;`.
///
/// Returns `None` when the line has neither.
#[must_use]
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    line.split_once([':', ';'])
}

/// Parses a single physical line.
///
/// Returns `None` for lines without a separator (blank lines included); such
/// lines contribute nothing to the document.
#[must_use]
pub fn parse_content_line(line: &str, matching: KeyMatching) -> Option<ContentLine<'_>> {
    let (name, value) = split_line(trim_line_ending(line))?;

    Some(ContentLine {
        property: Property::from_key(name, matching),
        name,
        value,
    })
}

/// Lazily splits a whole document into content lines.
///
/// Lines are separated by `\n`; a `\r` before it is dropped.
pub fn content_lines(input: &str, matching: KeyMatching) -> impl Iterator<Item = ContentLine<'_>> {
    input
        .split('\n')
        .filter_map(move |line| parse_content_line(line, matching))
}
