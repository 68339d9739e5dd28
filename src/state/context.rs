//! Ties application state, gesture tracking and the event bus together.
//!
//! `ScribbleContext` is the single entry point for changes: UI controls call
//! [`ScribbleContext::execute`] and the drawing surface feeds pointer input
//! into [`ScribbleContext::handle_input`]. Each applied command emits its
//! [`AppEvent`] on the bus, where the repaint and logging handlers pick it
//! up. Everything runs on the UI thread, one event at a time.
use crate::command::Command;
use crate::event::{AppEvent, EventBus, EventHandler};
use crate::input::{Gesture, GestureTracker, InputEvent};

use super::AppState;

#[derive(Debug, Default)]
pub struct ScribbleContext {
    state: AppState,
    gestures: GestureTracker,
    event_bus: EventBus,
}

impl ScribbleContext {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            gestures: GestureTracker::new(),
            event_bus: EventBus::new(),
        }
    }

    pub fn subscribe(&mut self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
    }

    /// Apply a command and broadcast the resulting event, if any.
    pub fn execute(&mut self, command: Command) -> Option<AppEvent> {
        let event = self.state.apply(command)?;
        self.event_bus.emit(&event);
        Some(event)
    }

    /// Run one pointer event through the gesture tracker and apply the
    /// commands it produces. Returns the gesture steps for inspection.
    pub fn handle_input(&mut self, event: &InputEvent) -> Vec<Gesture> {
        let gestures = self.gestures.handle(event);
        for gesture in &gestures {
            match gesture.command() {
                Some(command) => {
                    self.execute(command);
                }
                None => log::trace!("Ignoring {:?} in {:?} mode", gesture, self.state.mode()),
            }
        }
        gestures
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn gestures(&self) -> &GestureTracker {
        &self.gestures
    }
}
