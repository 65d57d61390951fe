use std::cell::RefCell;
use std::rc::Rc;

use crate::event::{EngineEvent, EventHandler};

/// Records every event it receives. Clones share the same record, so one
/// copy can be subscribed while another is inspected.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<EngineEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<EngineEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventHandler for EventLog {
    fn handle_event(&mut self, event: &EngineEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
