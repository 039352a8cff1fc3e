//! Concurrent parsing of the files named on the command line.

use std::path::PathBuf;

use vcardkit_core::constants::has_vcard_extension;
use vcardkit_core::error::CoreError;
use vcardkit_rfc::rfc::vcard::{ParseOptions, parse_file_with};

use crate::cli::Cli;
use crate::error::AppResult;
use crate::report::{FileReport, render_json, render_text};

/// Rendered output of one invocation.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub output: String,
    pub failures: usize,
}

/// ## Summary
/// Parses every file on the blocking pool and reports results in input order.
///
/// Each parse is independent, so files are read concurrently.
///
/// ## Errors
/// Returns an error if `strict_extensions` is set and a path lacks a vCard
/// extension, or if a parser task panics.
#[tracing::instrument(skip(paths, options), fields(files = paths.len()))]
pub async fn parse_files(
    paths: &[PathBuf],
    options: ParseOptions,
    strict_extensions: bool,
) -> AppResult<Vec<FileReport>> {
    for path in paths {
        if !has_vcard_extension(path) {
            if strict_extensions {
                return Err(CoreError::InvalidInput(format!(
                    "not a .vcf or .vcard file: {}",
                    path.display()
                ))
                .into());
            }
            tracing::warn!(path = %path.display(), "File does not have a vCard extension");
        }
    }

    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| {
            tokio::task::spawn_blocking(move || {
                let result = parse_file_with(&path, &options);
                FileReport { path, result }
            })
        })
        .collect();

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        reports.push(handle.await?);
    }

    tracing::info!(
        parsed = reports.iter().filter(|r| r.is_ok()).count(),
        failed = reports.iter().filter(|r| !r.is_ok()).count(),
        "Parsing finished"
    );

    Ok(reports)
}

/// ## Summary
/// Parses the files named by `cli` and renders the requested output format.
///
/// ## Errors
/// Returns an error if a file is rejected up front or rendering fails.
pub async fn run(cli: &Cli, options: ParseOptions) -> AppResult<RunOutcome> {
    let reports = parse_files(&cli.files, options, cli.strict_extensions).await?;
    let failures = reports.iter().filter(|r| !r.is_ok()).count();

    let output = if cli.json {
        render_json(&reports, &cli.properties)?
    } else {
        render_text(&reports, &cli.properties)
    };

    Ok(RunOutcome { output, failures })
}
