//! The Model: three text fields and their captions.
//!
//! Every setter replaces the value and then broadcasts to all observers,
//! whether or not the value actually changed.

use tracing::debug;

use crate::observer::{Observable, ObserverList};
use crate::types::{Field, ModelSnapshot};
use crate::view::FieldSource;

pub const DEFAULT_TITLE: &str = "Simple Model-View-Controller Implementation";
pub const DEFAULT_VERSION: &str = "0.2";
pub const DEFAULT_CREDITS: &str = "(put your name here)";

/// Field captions, fixed when the Model is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captions {
    title: String,
    version: String,
    credits: String,
}

impl Default for Captions {
    fn default() -> Self {
        Captions {
            title: "Title: ".to_string(),
            version: "Version: ".to_string(),
            credits: "Credits: ".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct Model {
    captions: Captions,
    title: String,
    version: String,
    credits: String,
    observers: ObserverList<Model>,
}

impl Model {
    /// A Model with the default captions and values and no observers.
    pub fn new() -> Self {
        Model {
            captions: Captions::default(),
            title: DEFAULT_TITLE.to_string(),
            version: DEFAULT_VERSION.to_string(),
            credits: DEFAULT_CREDITS.to_string(),
            observers: ObserverList::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn credits(&self) -> &str {
        &self.credits
    }

    pub fn title_caption(&self) -> &str {
        &self.captions.title
    }

    pub fn version_caption(&self) -> &str {
        &self.captions.version
    }

    pub fn credits_caption(&self) -> &str {
        &self.captions.credits
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.set(Field::Title, title);
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.set(Field::Version, version);
    }

    pub fn set_credits(&mut self, credits: impl Into<String>) {
        self.set(Field::Credits, credits);
    }

    /// Replace one field, then broadcast.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        debug!(?field, %value, "model field set");
        *self.slot(field) = value;
        self.notify_observers();
    }

    pub fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            title: self.title.clone(),
            version: self.version.clone(),
            credits: self.credits.clone(),
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.title,
            Field::Version => &mut self.version,
            Field::Credits => &mut self.credits,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Observable for Model {
    fn observers(&self) -> &ObserverList<Self> {
        &self.observers
    }

    fn observers_mut(&mut self) -> &mut ObserverList<Self> {
        &mut self.observers
    }
}

impl FieldSource for Model {
    fn caption(&self, field: Field) -> &str {
        match field {
            Field::Title => self.title_caption(),
            Field::Version => self.version_caption(),
            Field::Credits => self.credits_caption(),
        }
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => self.title(),
            Field::Version => self.version(),
            Field::Credits => self.credits(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::Observer;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records the title seen on every broadcast.
    #[derive(Default)]
    struct TitleLog(RefCell<Vec<String>>);

    impl Observer<Model> for TitleLog {
        fn update(&self, subject: &Model) {
            self.0.borrow_mut().push(subject.title().to_string());
        }
    }

    #[test]
    fn fresh_model_has_defaults() {
        let model = Model::new();
        assert_eq!(model.title(), "Simple Model-View-Controller Implementation");
        assert_eq!(model.version(), "0.2");
        assert_eq!(model.credits(), "(put your name here)");
    }

    #[test]
    fn fresh_model_has_captions() {
        let model = Model::new();
        assert_eq!(model.title_caption(), "Title: ");
        assert_eq!(model.version_caption(), "Version: ");
        assert_eq!(model.credits_caption(), "Credits: ");
    }

    #[test]
    fn setters_store_exact_values() {
        let mut model = Model::new();
        model.set_title("Hello");
        model.set_version("  1.0 ");
        model.set_credits("");

        assert_eq!(model.title(), "Hello");
        assert_eq!(model.version(), "  1.0 ");
        assert_eq!(model.credits(), "");
    }

    #[test]
    fn setters_leave_captions_alone() {
        let mut model = Model::new();
        model.set_title("x");
        model.set_version("y");
        model.set_credits("z");
        assert_eq!(model.captions, Captions::default());
    }

    #[test]
    fn each_setter_broadcasts_once() {
        let log = Rc::new(TitleLog::default());
        let mut model = Model::new();
        model.add_observer(&log);

        model.set_title("a");
        model.set_version("b");
        model.set_credits("c");

        assert_eq!(*log.0.borrow(), vec!["a", "a", "a"]);
    }

    #[test]
    fn setting_same_value_still_broadcasts() {
        let log = Rc::new(TitleLog::default());
        let mut model = Model::new();
        model.add_observer(&log);

        model.set_title(DEFAULT_TITLE);
        model.set_title(DEFAULT_TITLE);

        assert_eq!(log.0.borrow().len(), 2);
    }

    #[test]
    fn observer_sees_new_value_during_broadcast() {
        let log = Rc::new(TitleLog::default());
        let mut model = Model::new();
        model.add_observer(&log);

        model.set(Field::Title, "Hello");

        assert_eq!(log.0.borrow().last().map(String::as_str), Some("Hello"));
    }

    #[test]
    fn field_source_matches_getters() {
        let mut model = Model::new();
        model.set_credits("me");
        assert_eq!(model.value(Field::Credits), "me");
        assert_eq!(model.caption(Field::Version), "Version: ");
        assert_eq!(model.value(Field::Title), model.title());
    }

    #[test]
    fn snapshot_copies_values() {
        let mut model = Model::new();
        model.set_version("0.3");
        let snapshot = model.snapshot();
        assert_eq!(snapshot.title, DEFAULT_TITLE);
        assert_eq!(snapshot.version, "0.3");
        assert_eq!(snapshot.credits, DEFAULT_CREDITS);
    }
}
