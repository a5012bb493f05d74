//! Rustyline helper integration
//!
//! Provides completion, hinting, and highlighting for the REPL.

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};
use std::borrow::Cow;

/// REPL helper
pub struct BinlexHelper {
    hinter: HistoryHinter,
    commands: Vec<String>,
}

impl BinlexHelper {
    /// Create a new helper instance
    pub fn new() -> Self {
        Self {
            hinter: HistoryHinter::new(),
            commands: vec!["batch", "suite", "help", "quit", "exit"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    fn highlight_line(&self, line: &str) -> Option<String> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        if self.commands.iter().any(|c| c == &trimmed.to_lowercase()) {
            return Some(line.replace(trimmed, &trimmed.cyan().bold().to_string()));
        }

        // Binary input renders green; anything else is left untouched so
        // the alphabet error stays visible at analysis time
        if trimmed.chars().all(|c| c == '0' || c == '1') {
            return Some(line.replace(trimmed, &trimmed.green().to_string()));
        }

        None
    }
}

impl Default for BinlexHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for BinlexHelper {}

impl Completer for BinlexHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let prefix = &line[..pos];
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(prefix) && !prefix.is_empty())
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for BinlexHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for BinlexHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        match self.highlight_line(line) {
            Some(highlighted) => Cow::Owned(highlighted),
            None => Cow::Borrowed(line),
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.dimmed().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Validator for BinlexHelper {
    fn validate(
        &self,
        _ctx: &mut ValidationContext<'_>,
    ) -> Result<ValidationResult, ReadlineError> {
        // Single-line input only; verdicts handle anything malformed
        Ok(ValidationResult::Valid(None))
    }
}
