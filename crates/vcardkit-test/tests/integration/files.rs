//! Parsing from files on disk.

use vcardkit_test::component::constants::has_vcard_extension;
use vcardkit_test::component::validation::ValidationErrorKind;
use vcardkit_test::component::vcard::{
    ParseError, ParseErrorKind, ParseOptions, Property, parse, parse_file, parse_file_with,
};

use crate::helpers::{MISSING_FN, VALID, large_card, temp_dir, write_card};

#[test_log::test]
fn file_and_string_parse_identically() {
    let dir = temp_dir();
    let path = write_card(&dir, "simon.vcf", VALID);

    let from_file = parse_file(&path).unwrap();
    let from_str = parse(VALID).unwrap();

    assert_eq!(from_file, from_str);
    assert_eq!(from_file.formatted_name(), ["Simon Perreault"]);
    assert_eq!(from_file.gender(), Some("M"));
    assert_eq!(from_file.telephone().len(), 2);
    assert_eq!(
        from_file.telephone()[0],
        "VALUE=uri;TYPE=\"work,voice\";PREF=1:tel:+1-418-656-9254;ext=102"
    );
}

#[test_log::test]
fn validation_errors_surface_from_files() {
    let dir = temp_dir();
    let path = write_card(&dir, "broken.vcf", MISSING_FN);

    let err = parse_file(&path).unwrap_err();

    assert_eq!(
        err.kind(),
        ParseErrorKind::Validation(ValidationErrorKind::MissingRequiredProperty)
    );
    assert_eq!(err.property(), Some(Property::FormattedName));
}

#[test_log::test]
fn missing_file_is_an_open_error() {
    let dir = temp_dir();
    let err = parse_file(dir.path().join("nope.vcf")).unwrap_err();

    assert!(matches!(err, ParseError::Open { .. }));
    assert_eq!(err.kind(), ParseErrorKind::Io);
    assert!(err.to_string().contains("nope.vcf"));
}

#[test_log::test]
fn invalid_utf8_reports_the_line() {
    let dir = temp_dir();
    let mut bytes = b"BEGIN:VCARD\nVERSION:4.0\nFN:".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe]);
    bytes.extend_from_slice(b"\nEND:VCARD\n");
    let path = write_card(&dir, "binary.vcf", bytes);

    let err = parse_file(&path).unwrap_err();

    assert!(matches!(err, ParseError::Io { line: 3, .. }));
}

#[test_log::test]
fn large_file_streams_every_value() {
    let dir = temp_dir();
    let path = write_card(&dir, "bulk.vcf", large_card(10_000));

    let card = parse_file(&path).unwrap();

    assert_eq!(card.email().len(), 10_000);
    assert_eq!(card.email()[0], "user0@example.com");
    assert_eq!(card.email()[9_999], "user9999@example.com");
}

#[test_log::test]
fn version_leniency_applies_to_files() {
    let dir = temp_dir();
    let path = write_card(
        &dir,
        "v3.vcf",
        "BEGIN:VCARD\nVERSION:3.0\nFN:Old\nEND:VCARD\n",
    );

    assert!(parse_file(&path).is_err());

    let mut options = ParseOptions::default();
    options.validation.enforce_version = false;
    let card = parse_file_with(&path, &options).unwrap();
    assert_eq!(card.version(), "3.0");
}

#[test]
fn extension_check() {
    assert!(has_vcard_extension("a.vcf".as_ref()));
    assert!(has_vcard_extension("b.VCARD".as_ref()));
    assert!(!has_vcard_extension("c.txt".as_ref()));
    assert!(!has_vcard_extension("vcf".as_ref()));
}
