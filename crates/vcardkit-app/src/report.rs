//! Rendering of per-file parse outcomes.

use std::path::{Path, PathBuf};

use serde::Serialize;
use vcardkit_rfc::rfc::vcard::{ParseError, Property, VCard};

use crate::error::AppResult;

/// The outcome of parsing one file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: Result<VCard, ParseError>,
}

impl FileReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    path: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    card: Option<JsonCard<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum JsonCard<'a> {
    Full(&'a VCard),
    Filtered(Vec<(Property, &'a [String])>),
}

#[derive(Debug, Serialize)]
struct JsonError {
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    property: Option<Property>,
    message: String,
}

/// ## Summary
/// Renders reports as a JSON array, optionally keeping only some properties.
///
/// ## Errors
/// Returns an error if serialization fails.
pub fn render_json(reports: &[FileReport], filter: &[Property]) -> AppResult<String> {
    let entries: Vec<JsonReport<'_>> = reports
        .iter()
        .map(|report| match &report.result {
            Ok(card) => JsonReport {
                path: &report.path,
                card: Some(if filter.is_empty() {
                    JsonCard::Full(card)
                } else {
                    JsonCard::Filtered(selected(card, filter))
                }),
                error: None,
            },
            Err(err) => JsonReport {
                path: &report.path,
                card: None,
                error: Some(JsonError {
                    kind: err.kind().to_string(),
                    property: err.property(),
                    message: err.to_string(),
                }),
            },
        })
        .collect();

    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Renders reports as human-readable text, one block per file.
#[must_use]
pub fn render_text(reports: &[FileReport], filter: &[Property]) -> String {
    let mut lines = Vec::new();

    for report in reports {
        match &report.result {
            Ok(card) => {
                lines.push(format!("{}: ok", report.path.display()));
                let entries: Vec<(Property, &[String])> = if filter.is_empty() {
                    card.iter().collect()
                } else {
                    selected(card, filter)
                };
                for (property, values) in entries {
                    lines.extend(values.iter().map(|value| format!("  {property}: {value}")));
                }
            }
            Err(err) => lines.push(format!("{}: error: {err}", report.path.display())),
        }
    }

    lines.join("\n")
}

fn selected<'a>(card: &'a VCard, filter: &[Property]) -> Vec<(Property, &'a [String])> {
    filter
        .iter()
        .map(|property| (*property, card.get(*property)))
        .filter(|(_, values)| !values.is_empty())
        .collect()
}
