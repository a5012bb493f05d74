//! binlex - finite-state validation of binary strings
//!
//! Provides a batch harness, a one-shot check command, and an
//! interactive REPL around the analyzer.

use clap::Parser;
use colored::Colorize;
use std::process;

use binlex::analyzer::Analyzer;
use binlex::cli::{commands, Cli, Commands};
use binlex::repl::{
    BinlexHelper, Command, CommandResult, ReplConfig, ReplEvent, ReplPhase, ReplStateMachine,
};
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Commands::Repl) => run_repl(),
        Some(command) => commands::execute(command),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn run_repl() -> anyhow::Result<()> {
    print_banner();

    let repl_config = ReplConfig::default();

    let rustyline_config = Config::builder()
        .auto_add_history(true)
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .build();

    let helper = BinlexHelper::new();
    let mut editor: Editor<BinlexHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(rustyline_config)?;
    editor.set_helper(Some(helper));

    if let Some(history_path) = &repl_config.history_file {
        if history_path.exists() {
            let _ = editor.load_history(history_path);
        }
    }

    // One analyzer reused across the whole session; analyze() resets
    // per call, so this is equivalent to a fresh instance per line
    let mut analyzer = Analyzer::new();
    let mut state_machine = ReplStateMachine::new();

    loop {
        if state_machine.is_terminal() {
            break;
        }

        let event = match editor.readline(&repl_config.prompt) {
            Ok(line) => ReplEvent::LineSubmitted {
                line: line.trim().to_string(),
            },
            Err(ReadlineError::Interrupted) => ReplEvent::Interrupted,
            Err(ReadlineError::Eof) => ReplEvent::Eof,
            Err(err) => {
                eprintln!("{}: {:?}", "Readline error".red().bold(), err);
                break;
            }
        };

        match state_machine.process_event(event) {
            Ok(transition) => {
                if let Some(output) = transition.output {
                    println!("{}", output);
                }

                if let ReplPhase::Executing { command } = state_machine.phase().clone() {
                    run_command(&command, &mut analyzer, &mut state_machine);
                }
            }
            Err(e) => {
                eprintln!("{}: State machine error: {}", "Error".red().bold(), e);
                state_machine.reset();
            }
        }
    }

    if let Some(history_path) = &repl_config.history_file {
        if let Err(e) = editor.save_history(history_path) {
            eprintln!("{}: Failed to save history: {}", "Warning".yellow(), e);
        }
    }

    Ok(())
}

fn run_command(command: &Command, analyzer: &mut Analyzer, state_machine: &mut ReplStateMachine) {
    let result = match command.execute(analyzer) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            CommandResult::Silent
        }
    };

    match state_machine.process_event(ReplEvent::CommandExecuted { result }) {
        Ok(transition) => {
            if let Some(output) = transition.output {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("{}: State machine error: {}", "Error".red().bold(), e);
            state_machine.reset();
        }
    }
}

fn print_banner() {
    println!();
    println!(
        "{}",
        "═══════════════════════════════════════════════".bright_cyan()
    );
    println!(
        "{}",
        "   binlex - binary string validator".bright_cyan().bold()
    );
    println!(
        "{}",
        "═══════════════════════════════════════════════".bright_cyan()
    );
    println!();
    println!("  Version: {}", env!("CARGO_PKG_VERSION").green());
    println!(
        "  Rule: a string is {} when it contains only '0'/'1',",
        "valid".green().bold()
    );
    println!("        is longer than 2 characters, and has at least one '0'");
    println!();
    println!(
        "  Type a binary string to analyze it, {} for commands,",
        "'help'".yellow().bold()
    );
    println!(
        "  {} or {} to leave",
        "'quit'".yellow().bold(),
        "Ctrl+D".yellow().bold()
    );
    println!();
}
