pub use vcardkit_core::config::*;
use vcardkit_core::types::KeyMatching;
use vcardkit_rfc::rfc::vcard::ParseOptions;

use crate::cli::Cli;

/// ## Summary
/// Resolves parser options from configuration, letting command-line flags win.
#[must_use]
pub fn parse_options(settings: &Settings, cli: &Cli) -> ParseOptions {
    let mut options = ParseOptions::from(&settings.parser);

    if cli.case_sensitive {
        options.key_matching = KeyMatching::CaseSensitive;
    }
    if cli.any_version {
        options.validation.enforce_version = false;
    }

    options
}
