//! # binlex
//!
//! Finite-state validation of binary strings.
//!
//! A string over the alphabet {'0','1'} is accepted iff it is longer
//! than two characters and contains at least one '0'. Classification is
//! performed char-by-char by a five-state deterministic machine; the
//! verdict is an ordinary value carrying a categorical diagnostic, never
//! an error.
//!
//! ## Example
//!
//! ```rust
//! use binlex::prelude::*;
//!
//! let mut analyzer = Analyzer::new();
//! let verdict = analyzer.analyze("1010");
//! assert!(verdict.is_valid());
//!
//! let verdict = analyzer.analyze("111");
//! assert_eq!(verdict, Verdict::NoZero);
//! println!("{}", verdict);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analyzer;

/// Interactive REPL for exploring the analyzer
#[cfg(feature = "cli")]
pub mod repl;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::analyzer::{Analyzer, AnalyzerState, Verdict};
}
