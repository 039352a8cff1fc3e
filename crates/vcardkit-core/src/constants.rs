//! File-level vCard metadata shared across crates.

use std::path::Path;

/// Extensions conventionally used for vCard files (RFC 6350 §10.1).
pub const VCARD_FILE_EXTENSIONS: [&str; 2] = [".vcf", ".vcard"];

/// Registered media type for vCard 4.0.
pub const VCARD_MEDIA_TYPE: &str = "text/vcard";

/// `Content-Type` header value an integrator attaches to a serialized card.
pub const VCARD_CONTENT_TYPE: &str = const_str::concat!(VCARD_MEDIA_TYPE, "; charset=utf-8");

/// The only vCard version this parser accepts by default.
pub const VCARD_VERSION: &str = "4.0";

/// Value carried by both `BEGIN` and `END`.
pub const VCARD_DELIMITER_VALUE: &str = "VCARD";

/// Returns whether the path ends in one of [`VCARD_FILE_EXTENSIONS`] (case-insensitive).
#[must_use]
pub fn has_vcard_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            VCARD_FILE_EXTENSIONS
                .iter()
                .any(|known| known.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_includes_charset() {
        assert_eq!(VCARD_CONTENT_TYPE, "text/vcard; charset=utf-8");
    }

    #[test]
    fn recognizes_vcard_extensions() {
        assert!(has_vcard_extension(Path::new("contacts/jane.vcf")));
        assert!(has_vcard_extension(Path::new("jane.VCARD")));
        assert!(!has_vcard_extension(Path::new("jane.ics")));
        assert!(!has_vcard_extension(Path::new("vcf")));
    }
}
