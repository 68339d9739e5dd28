use crate::event::{AppEvent, EventHandler};

/// Fans each applied transition out to the registered handlers.
///
/// Owned by `ScribbleContext`, which is the only thing that subscribes to or
/// emits on it.
#[derive(Default)]
pub struct EventBus {
    handlers: Vec<Box<dyn EventHandler>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: Box<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    /// Handlers see events in subscription order.
    pub fn emit(&mut self, event: &AppEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct Tag(&'static str, Arc<Mutex<Vec<&'static str>>>);

    impl EventHandler for Tag {
        fn handle_event(&mut self, _event: &AppEvent) {
            self.1.lock().push(self.0);
        }
    }

    #[test]
    fn test_handlers_run_in_subscription_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.subscribe(Box::new(Tag("first", seen.clone())));
        bus.subscribe(Box::new(Tag("second", seen.clone())));

        bus.emit(&AppEvent::PromptChanged { index: 1 });
        assert_eq!(*seen.lock(), vec!["first", "second"]);
    }
}
