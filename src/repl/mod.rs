//! Interactive REPL for binlex
//!
//! A line-oriented loop around the analyzer: each submitted line is
//! either a control command or an input string to classify.

pub mod command;
pub mod helper;
pub mod state_machine;

pub use command::{Command, CommandResult};
pub use helper::BinlexHelper;
pub use state_machine::{ReplEvent, ReplPhase, ReplStateMachine, Transition};

/// REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string
    pub prompt: String,
    /// History file path
    pub history_file: Option<std::path::PathBuf>,
    /// Maximum history entries
    pub max_history: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "binlex> ".to_string(),
            history_file: Some(
                dirs::home_dir()
                    .unwrap_or_else(|| std::path::PathBuf::from("."))
                    .join(".binlex_history"),
            ),
            max_history: 1000,
        }
    }
}
