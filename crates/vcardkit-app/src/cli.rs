use std::path::PathBuf;

use clap::Parser;
use vcardkit_rfc::rfc::vcard::Property;

/// Parse and validate vCard 4.0 files.
#[derive(Debug, Clone, Parser)]
#[command(name = "vcardkit", version, about)]
pub struct Cli {
    /// vCard files to parse.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only print these properties (repeatable), e.g. `--property EMAIL`.
    #[arg(short, long = "property", value_name = "KEY")]
    pub properties: Vec<Property>,

    /// Emit a JSON array instead of text.
    #[arg(long)]
    pub json: bool,

    /// Match property names case-sensitively, overriding configuration.
    #[arg(long)]
    pub case_sensitive: bool,

    /// Accept any VERSION value, overriding configuration.
    #[arg(long)]
    pub any_version: bool,

    /// Reject files without a `.vcf` or `.vcard` extension instead of warning.
    #[arg(long)]
    pub strict_extensions: bool,
}
