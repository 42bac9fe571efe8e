//! Observer/Observable notification protocol.
//!
//! An [`Observable`] keeps an ordered registration list of observers and
//! broadcasts to all of them, synchronously and in registration order.
//!
//! Ownership: the list holds `Weak` references only. Whoever wires the
//! observers up (the composition root) owns them and must keep them alive
//! for as long as they should receive broadcasts. An observer that has
//! been dropped is silently skipped.
//!
//! Observers get a shared reference to the subject, so they cannot
//! mutate it from inside a broadcast.

use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

// ============================================================================
// OBSERVER
// ============================================================================

/// Receives a notification carrying the subject that changed.
///
/// There is no return channel: an observer reacts through its own side
/// effects (typically rendering) and must not fail the broadcast.
pub trait Observer<S> {
    fn update(&self, subject: &S);
}

/// Handle for one registration, used to deregister it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

// ============================================================================
// REGISTRATION LIST
// ============================================================================

/// Ordered, non-owning list of observers of subjects of type `S`.
///
/// Registering the same observer twice creates two entries, so it is
/// notified twice per broadcast.
pub struct ObserverList<S> {
    entries: Vec<(ObserverId, Weak<dyn Observer<S>>)>,
    next_id: u64,
}

impl<S> ObserverList<S> {
    pub fn new() -> Self {
        ObserverList {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Append an observer to the end of the list.
    pub fn add<O: Observer<S> + 'static>(&mut self, observer: &Rc<O>) -> ObserverId {
        let weak: Weak<O> = Rc::downgrade(observer);
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, weak));
        id
    }

    /// Remove one registration. Returns false if the id is unknown.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        match self.entries.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Call `update(subject)` on every live observer, in registration order.
    pub fn notify(&self, subject: &S) {
        for (id, weak) in &self.entries {
            match weak.upgrade() {
                Some(observer) => observer.update(subject),
                None => trace!(?id, "skipping dropped observer"),
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S> Default for ObserverList<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for ObserverList<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("len", &self.entries.len())
            .finish()
    }
}

// ============================================================================
// OBSERVABLE
// ============================================================================

/// Capability of broadcasting changes to registered observers.
///
/// Implementors only expose their [`ObserverList`]; registration and
/// broadcast come with the trait.
pub trait Observable: Sized {
    fn observers(&self) -> &ObserverList<Self>;

    fn observers_mut(&mut self) -> &mut ObserverList<Self>;

    fn add_observer<O: Observer<Self> + 'static>(&mut self, observer: &Rc<O>) -> ObserverId {
        self.observers_mut().add(observer)
    }

    fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers_mut().remove(id)
    }

    fn notify_observers(&self) {
        trace!(observers = self.observers().len(), "broadcast");
        self.observers().notify(self);
    }
}

// ============================================================================
// TESTS
// ============================================================================
