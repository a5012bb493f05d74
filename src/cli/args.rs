//! CLI argument definitions

use clap::{Parser, Subcommand};

/// Command-line interface for the binary-string validator
#[derive(Parser)]
#[command(name = "binlex")]
#[command(about = "Finite-state validation of binary strings")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; defaults to the interactive REPL
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch interactive REPL
    Repl,

    /// Analyze one or more strings and print their verdicts
    Check {
        /// Strings to analyze
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Run the built-in acceptance suite
    Batch,
}
