use serde::Deserialize;

/// How property names on input lines are compared against registry keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMatching {
    /// `fn:` and `FN:` both select the formatted name.
    #[default]
    CaseInsensitive,
    /// Only the exact uppercase key matches.
    CaseSensitive,
}

impl KeyMatching {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CaseInsensitive => "case_insensitive",
            Self::CaseSensitive => "case_sensitive",
        }
    }

    /// Compares an input name against a registry key under this policy.
    #[must_use]
    pub fn matches(self, input: &str, key: &str) -> bool {
        match self {
            Self::CaseInsensitive => input.eq_ignore_ascii_case(key),
            Self::CaseSensitive => input == key,
        }
    }
}

impl std::fmt::Display for KeyMatching {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
