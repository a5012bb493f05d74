//! CLI command implementations

use anyhow::Result;
use colored::Colorize;

use crate::analyzer::Analyzer;

use super::args::Commands;

/// The fixed acceptance suite run by `binlex batch` and the REPL's
/// `batch` command: input string paired with its expected validity.
pub const ACCEPTANCE_SUITE: &[(&str, bool)] = &[
    ("000", true),   // length 3, has zero
    ("001", true),
    ("010", true),
    ("100", true),
    ("101", true),
    ("110", true),
    ("01", false),   // too short
    ("11", false),   // too short and no zero
    ("0", false),
    ("1", false),
    ("111", false),  // no zero
    ("1111", false),
    ("1110", true),  // length 4, zero arrives late
    ("0111", true),
    ("1011", true),
    ("0a1", false),  // alphabet violation
    ("", false),     // empty
];

/// Execute a CLI command
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Repl => {
            // Handled in main.rs
            unreachable!("REPL command should be handled in main");
        }
        Commands::Check { inputs } => cmd_check(&inputs),
        Commands::Batch => cmd_batch(),
    }
}

fn cmd_check(inputs: &[String]) -> Result<()> {
    let mut analyzer = Analyzer::new();
    for input in inputs {
        let verdict = analyzer.analyze(input);
        println!("{}", format_verdict_line(input, verdict.is_valid(), &verdict.to_string()));
    }
    Ok(())
}

fn cmd_batch() -> Result<()> {
    let mut analyzer = Analyzer::new();
    println!("{}", render_acceptance_suite(&mut analyzer));
    Ok(())
}

/// Run every suite case and render the marker/message table.
///
/// Shared with the REPL's `batch` command, which prints the returned
/// string through its normal output path.
pub fn render_acceptance_suite(analyzer: &mut Analyzer) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Acceptance suite:".bold()));

    let mut passed = 0;
    for (input, expected) in ACCEPTANCE_SUITE {
        let verdict = analyzer.analyze(input);
        if verdict.is_valid() == *expected {
            passed += 1;
        }
        out.push_str(&format_verdict_line(input, verdict.is_valid(), &verdict.to_string()));
        out.push('\n');
    }

    out.push_str(&format!(
        "{} {}/{} cases matched expectations",
        "Done:".bold(),
        passed.to_string().green(),
        ACCEPTANCE_SUITE.len()
    ));
    out
}

fn format_verdict_line(input: &str, is_valid: bool, message: &str) -> String {
    let marker = if is_valid {
        "✓".green().bold()
    } else {
        "✗".red().bold()
    };
    format!("{} {:?}: {}", marker, input, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_expectations_hold() {
        let mut analyzer = Analyzer::new();
        for (input, expected) in ACCEPTANCE_SUITE {
            let verdict = analyzer.analyze(input);
            assert_eq!(
                verdict.is_valid(),
                *expected,
                "unexpected verdict for {:?}: {}",
                input,
                verdict
            );
        }
    }

    #[test]
    fn test_render_reports_full_pass() {
        let mut analyzer = Analyzer::new();
        let report = render_acceptance_suite(&mut analyzer);
        assert!(report.contains(&format!("{}", ACCEPTANCE_SUITE.len())));
    }
}
