//! End-to-end runs of the command-line front end.

use clap::Parser;
use vcardkit_test::component::app::{Cli, run};
use vcardkit_test::component::config::parse_options;
use vcardkit_test::component::types::KeyMatching;

use crate::helpers::{MISSING_FN, VALID, default_settings, temp_dir, write_card};

#[test_log::test(tokio::test)]
async fn text_run_over_mixed_files() {
    let dir = temp_dir();
    let good = write_card(&dir, "good.vcf", VALID);
    let bad = write_card(&dir, "bad.vcf", MISSING_FN);

    let cli = Cli::parse_from([
        std::ffi::OsStr::new("vcardkit"),
        good.as_os_str(),
        bad.as_os_str(),
    ]);
    let options = parse_options(&default_settings(), &cli);
    let outcome = run(&cli, options).await.unwrap();

    assert_eq!(outcome.failures, 1);
    assert!(outcome.output.contains("FN: Simon Perreault"));
    assert!(outcome.output.contains("missing required property: FN"));
}

#[test_log::test(tokio::test)]
async fn json_run_with_filter() {
    let dir = temp_dir();
    let good = write_card(&dir, "good.vcf", VALID);

    let cli = Cli::parse_from([
        std::ffi::OsStr::new("vcardkit"),
        std::ffi::OsStr::new("--json"),
        std::ffi::OsStr::new("-p"),
        std::ffi::OsStr::new("org"),
        good.as_os_str(),
    ]);
    let outcome = run(&cli, parse_options(&default_settings(), &cli))
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();

    assert_eq!(outcome.failures, 0);
    assert_eq!(value[0]["card"], serde_json::json!([["ORG", ["Viagenie"]]]));
}

#[test_log::test(tokio::test)]
async fn case_sensitive_flag_drops_lowercase_keys() {
    let dir = temp_dir();
    let path = write_card(
        &dir,
        "lower.vcf",
        "BEGIN:VCARD\nVERSION:4.0\nfn:lower\nEND:VCARD\n",
    );

    let lenient = Cli::parse_from([std::ffi::OsStr::new("vcardkit"), path.as_os_str()]);
    let options = parse_options(&default_settings(), &lenient);
    assert_eq!(options.key_matching, KeyMatching::CaseInsensitive);
    assert_eq!(run(&lenient, options).await.unwrap().failures, 0);

    let strict = Cli::parse_from([
        std::ffi::OsStr::new("vcardkit"),
        std::ffi::OsStr::new("--case-sensitive"),
        path.as_os_str(),
    ]);
    let options = parse_options(&default_settings(), &strict);
    assert_eq!(options.key_matching, KeyMatching::CaseSensitive);
    assert_eq!(run(&strict, options).await.unwrap().failures, 1);
}
