//! Command parsing and execution
//!
//! Maps a line of REPL input to either a control command or an input
//! string for the analyzer.

use crate::analyzer::Analyzer;
use anyhow::Result;
use colored::Colorize;

/// REPL command
///
/// Control keywords all contain letters outside {'0','1'}, so they can
/// never shadow a string the analyzer could accept; an analyzable line
/// always reaches [`Command::Analyze`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Feed a string to the analyzer: any non-keyword line
    Analyze {
        /// The input string
        input: String,
    },
    /// Run the built-in acceptance suite: batch | suite
    Batch,
    /// Show help: help | ?
    Help,
    /// Exit REPL: quit | exit
    Exit,
}

/// Command result
#[derive(Debug, Clone)]
pub enum CommandResult {
    /// Continue REPL
    Continue(String),
    /// Exit REPL
    Exit,
    /// No output
    Silent,
}

impl Command {
    /// Parse a command from a line of input.
    ///
    /// The line is trimmed first; keyword matching is case-insensitive,
    /// matching the sentinel behavior of the interactive loop.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.is_empty() {
            return Err(anyhow::anyhow!("Empty command"));
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" => Ok(Self::Exit),
            "help" | "?" => Ok(Self::Help),
            "batch" | "suite" => Ok(Self::Batch),
            _ => Ok(Self::Analyze {
                input: input.to_string(),
            }),
        }
    }

    /// Execute this command against the shared analyzer.
    pub fn execute(&self, analyzer: &mut Analyzer) -> Result<CommandResult> {
        match self {
            Self::Analyze { input } => {
                let verdict = analyzer.analyze(input);
                let label = if verdict.is_valid() {
                    "valid".green().bold()
                } else {
                    "invalid".red().bold()
                };
                Ok(CommandResult::Continue(format!(
                    "result: {} - {}",
                    label, verdict
                )))
            }
            Self::Batch => Ok(CommandResult::Continue(
                crate::cli::commands::render_acceptance_suite(analyzer),
            )),
            Self::Help => Ok(CommandResult::Continue(help_text())),
            Self::Exit => Ok(CommandResult::Exit),
        }
    }
}

fn help_text() -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Commands:".bold()));
    out.push_str(&format!(
        "  {}   run the built-in acceptance suite\n",
        "batch".cyan()
    ));
    out.push_str(&format!("  {}    show this help\n", "help".cyan()));
    out.push_str(&format!(
        "  {}    leave the REPL (also Ctrl+D)\n",
        "quit".cyan()
    ));
    out.push_str(&format!(
        "\nAny other line is analyzed as a binary string, e.g. {}\n",
        "1010".cyan()
    ));
    out.push_str("A string is valid when it is longer than 2 characters and contains a '0'.");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentinels_case_insensitive() {
        assert_eq!(Command::parse("quit").unwrap(), Command::Exit);
        assert_eq!(Command::parse("QUIT").unwrap(), Command::Exit);
        assert_eq!(Command::parse("  Exit  ").unwrap(), Command::Exit);
    }

    #[test]
    fn test_parse_binary_line_is_analyze() {
        assert_eq!(
            Command::parse("1010").unwrap(),
            Command::Analyze {
                input: "1010".to_string()
            }
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            Command::parse("  010 \n").unwrap(),
            Command::Analyze {
                input: "010".to_string()
            }
        );
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert!(Command::parse("   ").is_err());
    }
}
