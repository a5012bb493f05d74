//! CLI layer
//!
//! Argument parsing and subcommand execution for the `binlex` binary.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
