mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::EngineEvent;
pub use handlers::EventLog;

pub trait EventHandler {
    fn handle_event(&mut self, event: &EngineEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&EngineEvent),
{
    fn handle_event(&mut self, event: &EngineEvent) {
        self(event)
    }
}
