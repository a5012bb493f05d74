//! Deterministic validator for binary strings.
//!
//! The [`Analyzer`] runs a five-state machine over an input string and
//! classifies it: accepted iff the input is drawn from {'0','1'}, is
//! longer than two characters, and contains at least one '0'.
//!
//! A single analyzer may be reused across calls; [`Analyzer::analyze`]
//! always resets internal state first, so sequential reuse is
//! indistinguishable from constructing a fresh instance per input.

mod state;
mod verdict;

pub use state::AnalyzerState;
pub use verdict::Verdict;

/// Finite-state analyzer for binary strings.
///
/// Owns the run-scoped machine state: the current [`AnalyzerState`],
/// the monotonic zero flag, and the consumed-character count. Not safe
/// to share across threads without external synchronization, since
/// [`transition`](Self::transition) mutates in place; concurrent
/// callers should each own an instance.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    state: AnalyzerState,
    has_zero: bool,
    char_count: usize,
}

impl Analyzer {
    /// Create a new analyzer in the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the machine to the start of a run.
    ///
    /// Called internally at the start of every [`analyze`](Self::analyze);
    /// callers never need to invoke it between inputs.
    pub fn reset(&mut self) {
        self.state = AnalyzerState::Initial;
        self.has_zero = false;
        self.char_count = 0;
    }

    /// Consume one character, advancing the machine.
    ///
    /// The character must already have passed the alphabet check; only
    /// '0' and '1' ever reach this point.
    pub fn transition(&mut self, ch: char) {
        debug_assert!(ch == '0' || ch == '1', "unvalidated character {:?}", ch);

        self.char_count += 1;
        if ch == '0' {
            self.has_zero = true;
        }
        self.state = self.state.advance(self.has_zero);
    }

    /// The current machine state.
    pub fn state(&self) -> AnalyzerState {
        self.state
    }

    /// Number of characters consumed in the current run.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Analyze one input string and return its verdict.
    ///
    /// Alphabet membership is checked up front, left to right; the first
    /// character outside {'0','1'} fails the run immediately and no
    /// state transitions are attempted. Otherwise the machine is reset,
    /// every character is fed through [`transition`](Self::transition),
    /// and the final state and counters select the verdict.
    ///
    /// The empty string is acceptable input and classifies as
    /// [`Verdict::TooShort`] with length 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binlex::analyzer::{Analyzer, Verdict};
    ///
    /// let mut analyzer = Analyzer::new();
    /// assert!(analyzer.analyze("1110").is_valid());
    /// assert_eq!(analyzer.analyze("111"), Verdict::NoZero);
    /// assert_eq!(analyzer.analyze("01"), Verdict::TooShort { length: 2 });
    /// ```
    pub fn analyze(&mut self, input: &str) -> Verdict {
        if let Some(found) = input.chars().find(|c| *c != '0' && *c != '1') {
            return Verdict::InvalidAlphabet { found };
        }

        self.reset();
        for ch in input.chars() {
            self.transition(ch);
        }

        self.classify()
    }

    /// Map the final machine state and counters to a verdict.
    ///
    /// Precedence: acceptance, then insufficient length, then missing
    /// zero. The final arm would require a prefix state with more than
    /// two characters consumed, which the transition table rules out.
    fn classify(&self) -> Verdict {
        match self.state {
            AnalyzerState::AcceptingRun => Verdict::Valid,
            _ if self.char_count <= 2 => Verdict::TooShort {
                length: self.char_count,
            },
            AnalyzerState::NoZeroRun => Verdict::NoZero,
            state => {
                debug_assert!(
                    false,
                    "transition table violated: state {} after {} characters",
                    state, self.char_count
                );
                Verdict::Unknown
            }
        }
    }
}
