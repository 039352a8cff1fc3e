//! Property cardinality rules (RFC 6350 §3.3).

/// How many instances of a property a single vCard may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// `1`: exactly one instance.
    ExactlyOne,
    /// `*1`: zero or one instance.
    AtMostOne,
    /// `1*`: one or more instances.
    OneOrMore,
    /// `*`: any number of instances.
    ZeroOrMore,
}

impl Cardinality {
    /// Returns whether `count` instances satisfy this rule.
    #[must_use]
    pub const fn allows(self, count: usize) -> bool {
        match self {
            Self::ExactlyOne => count == 1,
            Self::AtMostOne => count <= 1,
            Self::OneOrMore => count >= 1,
            Self::ZeroOrMore => true,
        }
    }

    /// Returns the RFC 6350 notation for this rule.
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            Self::ExactlyOne => "1",
            Self::AtMostOne => "*1",
            Self::OneOrMore => "1*",
            Self::ZeroOrMore => "*",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExactlyOne => "exactly one",
            Self::AtMostOne => "at most one",
            Self::OneOrMore => "one or more",
            Self::ZeroOrMore => "zero or more",
        }
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
