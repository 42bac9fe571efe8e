//! Composition root: owns the Model, the views and the controller.
//!
//! Wiring order matters. Views register on the Model first, the
//! controller is bound second, and one initial broadcast renders the
//! starting state before the read loop takes over.

use std::cell::{Ref, RefCell};
use std::io::BufRead;
use std::rc::Rc;

use tracing::info;

use crate::controller::Controller;
use crate::error::Result;
use crate::model::Model;
use crate::observer::{Observable, Observer};
use crate::output::Output;
use crate::types::{Config, OutputFormat};
use crate::view::{SnapshotView, Views};

pub struct Application<R> {
    model: Rc<RefCell<Model>>,
    // Held only so the Model's weak registrations stay live.
    _observer: Rc<dyn Observer<Model>>,
    controller: Controller<R>,
    output: Output,
}

impl<R: BufRead> Application<R> {
    /// Build and wire everything, then render the initial state.
    pub fn new(config: &Config, input: R, output: Output) -> Self {
        let model = Rc::new(RefCell::new(Model::new()));

        let observer: Rc<dyn Observer<Model>> = match config.format {
            OutputFormat::Human => {
                let views = Rc::new(Views::new(output.clone()));
                views.set_model(&mut *model.borrow_mut());
                views
            }
            OutputFormat::Json => {
                let view = Rc::new(SnapshotView::new(output.clone()));
                model.borrow_mut().add_observer(&view);
                view
            }
        };

        let mut controller = Controller::new(input);
        controller.set_model(&model);

        info!(format = ?config.format, color = output.color(), "application wired");
        model.borrow().notify_observers();

        Application {
            model,
            _observer: observer,
            controller,
            output,
        }
    }

    /// Hand control to the controller until it terminates.
    pub fn run(&mut self) -> Result<()> {
        self.controller.run()?;
        self.output.finish()
    }

    pub fn model(&self) -> Ref<'_, Model> {
        self.model.borrow()
    }
}

// ============================================================================
// TESTS
// ============================================================================
