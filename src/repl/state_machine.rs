//! REPL state machine
//!
//! A small phase/event machine driving the read-eval-print cycle, so
//! the loop in the binary stays a thin readline-to-event adapter.

use super::command::{Command, CommandResult};
use anyhow::Result;
use colored::Colorize;

/// REPL execution phase
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReplPhase {
    /// Ready to accept new input
    #[default]
    Ready,

    /// Executing a command
    Executing {
        /// The command being executed
        command: Command,
    },

    /// Exiting the REPL
    Exiting,
}

impl ReplPhase {
    /// Check if the phase is terminal (requires exit)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Exiting)
    }
}

/// REPL event
///
/// Events that trigger phase transitions.
#[derive(Debug, Clone)]
pub enum ReplEvent {
    /// User submitted a line of input
    LineSubmitted {
        /// The input line
        line: String,
    },

    /// Command execution completed
    CommandExecuted {
        /// The execution result
        result: CommandResult,
    },

    /// User interrupted (Ctrl+C)
    Interrupted,

    /// End of file (Ctrl+D)
    Eof,
}

/// State transition result
#[derive(Debug)]
pub struct Transition {
    /// New phase after transition
    pub new_phase: ReplPhase,
    /// Optional output message
    pub output: Option<String>,
}

impl Transition {
    /// Create a transition with no output
    pub fn to(phase: ReplPhase) -> Self {
        Self {
            new_phase: phase,
            output: None,
        }
    }

    /// Create a transition with output
    pub fn to_with_output(phase: ReplPhase, output: String) -> Self {
        Self {
            new_phase: phase,
            output: Some(output),
        }
    }
}

/// State machine for REPL execution
#[derive(Default)]
pub struct ReplStateMachine {
    phase: ReplPhase,
}

impl ReplStateMachine {
    /// Create a new state machine in Ready phase
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current phase
    pub fn phase(&self) -> &ReplPhase {
        &self.phase
    }

    /// Check if the state machine is in a terminal state
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Process an event and transition to a new phase
    pub fn process_event(&mut self, event: ReplEvent) -> Result<Transition> {
        let transition = match (&self.phase, &event) {
            (ReplPhase::Ready, ReplEvent::LineSubmitted { line }) => {
                if line.trim().is_empty() {
                    // Empty line, stay in Ready
                    Transition::to(ReplPhase::Ready)
                } else {
                    match Command::parse(line) {
                        Ok(command) => Transition::to(ReplPhase::Executing { command }),
                        Err(e) => Transition::to_with_output(
                            ReplPhase::Ready,
                            format!("{}: {}", "Parse error".red().bold(), e),
                        ),
                    }
                }
            }

            (ReplPhase::Ready, ReplEvent::Interrupted) => Transition::to_with_output(
                ReplPhase::Ready,
                "^C (type 'quit' or press Ctrl+D to leave)".yellow().to_string(),
            ),

            (ReplPhase::Ready, ReplEvent::Eof) => {
                Transition::to_with_output(ReplPhase::Exiting, "Goodbye!".green().to_string())
            }

            (ReplPhase::Executing { .. }, ReplEvent::CommandExecuted { result }) => match result {
                CommandResult::Continue(output) => {
                    if output.is_empty() {
                        Transition::to(ReplPhase::Ready)
                    } else {
                        Transition::to_with_output(ReplPhase::Ready, output.clone())
                    }
                }
                CommandResult::Exit => {
                    Transition::to_with_output(ReplPhase::Exiting, "Goodbye!".green().to_string())
                }
                CommandResult::Silent => Transition::to(ReplPhase::Ready),
            },

            (ReplPhase::Executing { .. }, ReplEvent::Interrupted) => {
                Transition::to(ReplPhase::Ready)
            }

            // Exiting state (terminal)
            (ReplPhase::Exiting, _) => Transition::to(ReplPhase::Exiting),

            (current, event) => {
                eprintln!(
                    "{}: Unexpected event {:?} in phase {:?}",
                    "Warning".yellow(),
                    event,
                    current
                );
                Transition::to(ReplPhase::Ready)
            }
        };

        self.phase = transition.new_phase.clone();

        Ok(transition)
    }

    /// Reset to Ready phase
    pub fn reset(&mut self) {
        self.phase = ReplPhase::Ready;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_to_executing() {
        let mut sm = ReplStateMachine::new();
        assert!(matches!(sm.phase(), ReplPhase::Ready));

        let result = sm.process_event(ReplEvent::LineSubmitted {
            line: "1010".to_string(),
        });
        assert!(result.is_ok());
        assert!(matches!(sm.phase(), ReplPhase::Executing { .. }));
    }

    #[test]
    fn test_empty_line_stays_ready() {
        let mut sm = ReplStateMachine::new();
        sm.process_event(ReplEvent::LineSubmitted {
            line: "   ".to_string(),
        })
        .unwrap();
        assert!(matches!(sm.phase(), ReplPhase::Ready));
    }

    #[test]
    fn test_interrupt_recovery() {
        let mut sm = ReplStateMachine::new();
        let result = sm.process_event(ReplEvent::Interrupted);
        assert!(result.is_ok());
        assert!(matches!(sm.phase(), ReplPhase::Ready));
    }

    #[test]
    fn test_eof_exits() {
        let mut sm = ReplStateMachine::new();
        let result = sm.process_event(ReplEvent::Eof);
        assert!(result.is_ok());
        assert!(matches!(sm.phase(), ReplPhase::Exiting));
        assert!(sm.is_terminal());
    }

    #[test]
    fn test_exit_command_result_terminates() {
        let mut sm = ReplStateMachine::new();
        sm.process_event(ReplEvent::LineSubmitted {
            line: "quit".to_string(),
        })
        .unwrap();
        assert!(matches!(sm.phase(), ReplPhase::Executing { .. }));

        sm.process_event(ReplEvent::CommandExecuted {
            result: CommandResult::Exit,
        })
        .unwrap();
        assert!(sm.is_terminal());
    }
}
