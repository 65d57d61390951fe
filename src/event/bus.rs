use std::cell::RefCell;

use crate::event::{EngineEvent, EventHandler};

/// Fan-out point between the engine and its observers.
///
/// The engine owns one bus and reports every story change, commit, replay
/// and load on it, so a renderer or autosave can follow along without the
/// engine knowing about them. Subscribing only needs `&self`, which lets a
/// host register observers through [`crate::Engine::events`].
pub struct EventBus {
    observers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("observers", &self.observer_count())
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            observers: RefCell::new(Vec::new()),
        }
    }

    /// Observers are called in subscription order and stay registered for
    /// the lifetime of the engine.
    pub fn subscribe(&self, observer: Box<dyn EventHandler>) {
        self.observers.borrow_mut().push(observer);
        log::debug!("Event observer registered ({} total)", self.observer_count());
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Delivers `event` synchronously; the engine resumes once every
    /// observer has returned. Observers must not subscribe from inside
    /// `handle_event`.
    pub(crate) fn emit(&self, event: EngineEvent) {
        let mut observers = self.observers.borrow_mut();
        log::trace!("{event:?} -> {} observers", observers.len());
        for observer in observers.iter_mut() {
            observer.handle_event(&event);
        }
    }
}
