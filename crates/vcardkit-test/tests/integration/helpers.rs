#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Every helper writes into a fresh temporary directory that is removed when
//! the returned `TempDir` is dropped.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use vcardkit_test::component::config::Settings;

pub const VALID: &str = "BEGIN:VCARD\r\n\
    VERSION:4.0\r\n\
    FN:Simon Perreault\r\n\
    N:Perreault;Simon;;;ing. jr,M.Sc.\r\n\
    BDAY:--0203\r\n\
    GENDER:M\r\n\
    EMAIL;TYPE=work:simon.perreault@viagenie.ca\r\n\
    TEL;VALUE=uri;TYPE=\"work,voice\";PREF=1:tel:+1-418-656-9254;ext=102\r\n\
    TEL;VALUE=uri;TYPE=\"work,cell,voice,video,text\":tel:+1-418-262-6501\r\n\
    ORG:Viagenie\r\n\
    END:VCARD\r\n";

pub const MISSING_FN: &str = "BEGIN:VCARD\nVERSION:4.0\nEND:VCARD\n";

/// Creates a temporary directory.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Writes `contents` to `name` inside `dir`.
pub fn write_card(dir: &TempDir, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write card");
    path
}

/// Builds a valid card with `count` `EMAIL` lines.
pub fn large_card(count: usize) -> String {
    let mut card = String::from("BEGIN:VCARD\nVERSION:4.0\nFN:Bulk\n");
    for i in 0..count {
        writeln!(card, "EMAIL:user{i}@example.com").expect("write to string");
    }
    card.push_str("END:VCARD\n");
    card
}

/// Settings with every default and no file or environment overrides.
pub fn default_settings() -> Settings {
    Settings::from_toml_str("").expect("default settings")
}
