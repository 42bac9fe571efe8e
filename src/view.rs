//! Views: observers that render the Model to an [`Output`].
//!
//! Leaf views ([`FieldView`]) each render one caption/value line. The
//! composite [`Views`] owns the three leaves, registers them and then
//! itself on the Model, and renders the menu after them. Registration
//! order is the rendering order.

use std::rc::Rc;

use tracing::error;

use crate::model::Model;
use crate::observer::{Observable, Observer};
use crate::output::Output;
use crate::theme;
use crate::types::Field;

pub const SEPARATOR: &str = "_____________________________";
pub const MENU: &str = "Type t to edit Title, v to edit Version, c to edit Credits. Type q to quit.";
pub const PROMPT: &str = ">> ";

/// Anything that exposes captioned text fields.
///
/// Leaf views only need this much, so they work with any such subject,
/// not just [`Model`].
pub trait FieldSource {
    fn caption(&self, field: Field) -> &str;
    fn value(&self, field: Field) -> &str;
}

// ============================================================================
// LEAF VIEWS
// ============================================================================

/// Renders `<caption><value>` for one field on every notification.
pub struct FieldView {
    field: Field,
    output: Output,
}

impl FieldView {
    pub fn new(field: Field, output: Output) -> Self {
        FieldView { field, output }
    }

    /// The title view.
    pub fn title(output: Output) -> Self {
        Self::new(Field::Title, output)
    }

    /// The version view.
    pub fn version(output: Output) -> Self {
        Self::new(Field::Version, output)
    }

    /// The credits view.
    pub fn credits(output: Output) -> Self {
        Self::new(Field::Credits, output)
    }
}

impl<S: FieldSource> Observer<S> for FieldView {
    fn update(&self, subject: &S) {
        let caption = self.output.paint(theme::caption(), subject.caption(self.field));
        self.output
            .line(&format!("{}{}", caption, subject.value(self.field)));
    }
}

// ============================================================================
// COMPOSITE
// ============================================================================

/// The three field views plus the command menu.
pub struct Views {
    title: Rc<FieldView>,
    version: Rc<FieldView>,
    credits: Rc<FieldView>,
    output: Output,
}

impl Views {
    pub fn new(output: Output) -> Self {
        Views {
            title: Rc::new(FieldView::title(output.clone())),
            version: Rc::new(FieldView::version(output.clone())),
            credits: Rc::new(FieldView::credits(output.clone())),
            output,
        }
    }

    /// Register title, version, credits and then this composite on
    /// `observable`, in that order.
    pub fn set_model<S>(self: &Rc<Self>, observable: &mut S)
    where
        S: Observable + FieldSource + 'static,
    {
        observable.add_observer(&self.title);
        observable.add_observer(&self.version);
        observable.add_observer(&self.credits);
        observable.add_observer(self);
    }
}

impl<S> Observer<S> for Views {
    fn update(&self, _subject: &S) {
        self.output
            .line(&self.output.paint(theme::separator(), SEPARATOR));
        self.output.line(&self.output.paint(theme::menu(), MENU));
        self.output.prompt(&self.output.paint(theme::menu(), PROMPT));
    }
}

// ============================================================================
// JSON
// ============================================================================

/// Renders the Model as one JSON object line per broadcast.
pub struct SnapshotView {
    output: Output,
}

impl SnapshotView {
    pub fn new(output: Output) -> Self {
        SnapshotView { output }
    }
}

impl Observer<Model> for SnapshotView {
    fn update(&self, subject: &Model) {
        match serde_json::to_string(&subject.snapshot()) {
            Ok(json) => self.output.line(&json),
            Err(e) => error!(error = %e, "failed to serialize model snapshot"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
