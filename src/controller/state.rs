//! Controller state algebra: pure types, zero effects.
//!
//! The read loop feeds [`Input`]s through the transition function in
//! `update` and interprets the resulting [`Transition`].

use crate::types::Field;

// ============================================================================
// STATE
// ============================================================================

/// Where the controller is in the command protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// Waiting for a single-character command.
    #[default]
    AwaitingCommand,
    /// A `t`/`v`/`c` command was read; the next line is the new value.
    AwaitingLine(Field),
    /// `q` or end of input. Terminal.
    Terminated,
}

// ============================================================================
// INPUT
// ============================================================================

/// One unit of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// A full line with its terminator stripped.
    Line(&'a str),
    /// No more input is available.
    EndOfInput,
}

/// Meaning of the first non-whitespace character on a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `t`, `v` or `c`: edit a field.
    Edit(Field),
    /// `q`.
    Quit,
    /// Anything else. Dropped.
    Unrecognized(char),
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of feeding one input to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Move to this state, nothing else happens.
    State(ControllerState),
    /// Stop the read loop.
    Quit,
    /// Apply an effect to the Model, then await the next command.
    Effect(Effect),
}

/// Model mutation requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetField { field: Field, value: String },
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_awaits_command() {
        assert_eq!(ControllerState::default(), ControllerState::AwaitingCommand);
    }

    #[test]
    fn awaiting_line_carries_field() {
        assert_ne!(
            ControllerState::AwaitingLine(Field::Title),
            ControllerState::AwaitingLine(Field::Credits)
        );
    }
}
