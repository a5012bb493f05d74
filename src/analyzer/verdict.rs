//! Outcome categories for a completed analysis.

/// The verdict returned by [`Analyzer::analyze`](crate::analyzer::Analyzer::analyze).
///
/// Every category, including the alphabet violation, is an ordinary
/// returned value. Nothing here is an error type: collaborators are
/// expected to keep prompting or iterating after any outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Verdict {
    /// Length > 2 and at least one '0' present.
    Valid,

    /// Length ≤ 2, regardless of zero content.
    ///
    /// Carries the measured length. Takes precedence over a missing
    /// zero as the reported reason.
    TooShort {
        /// Number of characters consumed.
        length: usize,
    },

    /// Length > 2 but no '0' ever appeared.
    NoZero,

    /// Input contained a character outside {'0', '1'}.
    ///
    /// Carries the first offending character in scan order; no state
    /// transitions were attempted.
    InvalidAlphabet {
        /// First character outside the alphabet.
        found: char,
    },

    /// Defensive fallback. Never produced by a correct transition table.
    Unknown,
}

impl Verdict {
    /// Whether the input was accepted.
    ///
    /// True only for [`Valid`](Self::Valid).
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Get the category name for this verdict
    pub fn category(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::TooShort { .. } => "too-short",
            Self::NoZero => "no-zero",
            Self::InvalidAlphabet { .. } => "invalid-alphabet",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid => {
                write!(f, "valid string (length > 2 and contains at least one '0')")
            }
            Self::TooShort { length } => {
                write!(f, "string too short (length {}, need > 2)", length)
            }
            Self::NoZero => write!(f, "string contains no '0'"),
            Self::InvalidAlphabet { found } => write!(
                f,
                "invalid character {:?}; only '0' and '1' are allowed",
                found
            ),
            Self::Unknown => write!(f, "unknown analysis failure"),
        }
    }
}
