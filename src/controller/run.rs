//! Controller effects boundary: the blocking read loop.
//!
//! Reads lines from the input, pushes them through the pure transition
//! function and applies the resulting effects to the bound Model. All
//! rendering happens as a side effect of the Model's broadcasts.

use std::cell::RefCell;
use std::io::BufRead;
use std::rc::{Rc, Weak};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::Model;

use super::state::{ControllerState, Effect, Input, Transition};
use super::update::{strip_line_ending, update};

/// Reads commands from `R` and edits the Model.
///
/// Holds only a weak reference to the Model; the composition root owns it.
pub struct Controller<R> {
    input: R,
    model: Weak<RefCell<Model>>,
    state: ControllerState,
}

impl<R: BufRead> Controller<R> {
    pub fn new(input: R) -> Self {
        Controller {
            input,
            model: Weak::new(),
            state: ControllerState::AwaitingCommand,
        }
    }

    /// Bind the Model this controller edits.
    pub fn set_model(&mut self, model: &Rc<RefCell<Model>>) {
        self.model = Rc::downgrade(model);
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Run the command loop until `q` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let model = self.model.upgrade().ok_or(Error::ModelUnbound)?;
        let mut buf = Vec::new();

        info!("controller started");
        while self.state != ControllerState::Terminated {
            buf.clear();
            let read = self.input.read_until(b'\n', &mut buf)?;
            let line = String::from_utf8_lossy(&buf);

            let input = if read == 0 {
                Input::EndOfInput
            } else {
                Input::Line(strip_line_ending(&line))
            };
            debug!(state = ?self.state, ?input, "controller input");

            match update(self.state, input) {
                Transition::State(next) => self.state = next,
                Transition::Quit => self.state = ControllerState::Terminated,
                Transition::Effect(effect) => {
                    apply_effect(effect, &mut model.borrow_mut());
                    self.state = ControllerState::AwaitingCommand;
                }
            }
        }
        info!("controller terminated");

        Ok(())
    }
}

/// Apply an effect requested by a pure transition.
fn apply_effect(effect: Effect, model: &mut Model) {
    match effect {
        Effect::SetField { field, value } => model.set(field, value),
    }
}

// ============================================================================
// TESTS
// ============================================================================
