//! Pure state transitions: (ControllerState, Input) → Transition.
//!
//! Command lines behave like whitespace-skipping single-character reads:
//! blank lines are skipped, the first non-whitespace character is the
//! command and the rest of its line is discarded. The value for an edit
//! command is the whole next line, taken verbatim.

use crate::types::Field;

use super::state::{Command, ControllerState, Effect, Input, Transition};

/// Parse a command line. `None` if the line holds only whitespace.
pub fn parse_command(line: &str) -> Option<Command> {
    let key = line.chars().find(|c| !c.is_whitespace())?;
    let command = match key {
        'q' => Command::Quit,
        key => match Field::from_key(key) {
            Some(field) => Command::Edit(field),
            None => Command::Unrecognized(key),
        },
    };
    Some(command)
}

/// Pure transition function.
///
/// End of input terminates from every state. In particular, running out
/// of input while a value is pending leaves the Model untouched.
pub fn update(state: ControllerState, input: Input<'_>) -> Transition {
    match (state, input) {
        (ControllerState::Terminated, _) | (_, Input::EndOfInput) => Transition::Quit,
        (ControllerState::AwaitingCommand, Input::Line(line)) => match parse_command(line) {
            None | Some(Command::Unrecognized(_)) => {
                Transition::State(ControllerState::AwaitingCommand)
            }
            Some(Command::Quit) => Transition::Quit,
            Some(Command::Edit(field)) => Transition::State(ControllerState::AwaitingLine(field)),
        },
        (ControllerState::AwaitingLine(field), Input::Line(line)) => {
            Transition::Effect(Effect::SetField {
                field,
                value: line.to_string(),
            })
        }
    }
}

/// Strip one trailing `\n` or `\r\n`.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

// ============================================================================
// TESTS
// ============================================================================
