//! Console controller.
//!
//! Organized like a small state machine:
//! - `state`: pure types (ControllerState, Input, Transition)
//! - `update`: pure transitions and command parsing
//! - `run`: the blocking read loop, the only part with effects

pub mod run;
pub mod state;
pub mod update;

pub use run::Controller;
