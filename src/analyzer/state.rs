//! Machine states and the transition table.

/// A state of the binary-string validator.
///
/// The machine tracks exactly two facts: how many characters have been
/// consumed (clamped to 0, 1, 2, ≥3) and whether a '0' has appeared.
/// Those compose into five states; once three characters have been read
/// and a zero has occurred, the zero bit stops mattering and
/// [`AcceptingRun`](Self::AcceptingRun) absorbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Default)]
pub enum AnalyzerState {
    /// Zero characters consumed.
    #[default]
    Initial,

    /// Exactly one character consumed.
    OneRead,

    /// Exactly two characters consumed.
    TwoRead,

    /// Three or more characters consumed and at least one '0' seen.
    ///
    /// Absorbing: no further input leaves this state.
    AcceptingRun,

    /// Three or more characters consumed and no '0' seen yet.
    ///
    /// Not terminal-fixed: a later '0' promotes the run to
    /// [`AcceptingRun`](Self::AcceptingRun).
    NoZeroRun,
}

impl AnalyzerState {
    /// Apply the transition table for one consumed character.
    ///
    /// `has_zero` must already reflect the character being consumed,
    /// i.e. the caller updates its zero flag first and passes the
    /// updated value here.
    #[inline]
    pub fn advance(self, has_zero: bool) -> Self {
        match (self, has_zero) {
            (Self::Initial, _) => Self::OneRead,
            (Self::OneRead, _) => Self::TwoRead,
            (Self::TwoRead, true) => Self::AcceptingRun,
            (Self::TwoRead, false) => Self::NoZeroRun,
            (Self::AcceptingRun, _) => Self::AcceptingRun,
            (Self::NoZeroRun, true) => Self::AcceptingRun,
            (Self::NoZeroRun, false) => Self::NoZeroRun,
        }
    }

    /// Whether this is the accepting state.
    #[inline]
    pub fn is_accepting(&self) -> bool {
        matches!(self, Self::AcceptingRun)
    }

    /// Get a human-readable name for this state
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::OneRead => "one-read",
            Self::TwoRead => "two-read",
            Self::AcceptingRun => "accepting-run",
            Self::NoZeroRun => "no-zero-run",
        }
    }
}

impl std::fmt::Display for AnalyzerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
