use egui::Pos2;

use super::{InputEvent, PointerId};
use crate::command::Command;

/// Lifecycle notifications for one drawing gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// The tracked pointer went down
    Start(Pos2),
    /// The tracked pointer moved to a new position while pressed
    Drag(Pos2),
    /// The pointer was released without ever moving
    Tap(Pos2),
    /// The gesture is over, by release or cancellation
    End,
}

impl Gesture {
    /// The state change this gesture step asks for. Taps change nothing.
    pub fn command(&self) -> Option<Command> {
        match self {
            Gesture::Start(point) => Some(Command::BeginStroke(*point)),
            Gesture::Drag(point) => Some(Command::ExtendStroke(*point)),
            Gesture::Tap(_) => None,
            Gesture::End => Some(Command::CommitStroke),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Tracking {
        pointer: PointerId,
        /// Whether any move has been registered since the press
        moved: bool,
        last: Pos2,
    },
}

/// Follows one pointer from press to release.
///
/// The first pointer to go down owns the gesture; other pointers are
/// ignored until it ends.
#[derive(Debug, Default)]
pub struct GestureTracker {
    state: GestureState,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, GestureState::Tracking { .. })
    }

    /// Feed one input event and return the gesture steps it produced.
    pub fn handle(&mut self, event: &InputEvent) -> Vec<Gesture> {
        match (self.state, *event) {
            (GestureState::Idle, InputEvent::PointerDown { pointer, position }) => {
                self.state = GestureState::Tracking {
                    pointer,
                    moved: false,
                    last: position,
                };
                vec![Gesture::Start(position)]
            }
            (GestureState::Idle, _) => Vec::new(),
            (GestureState::Tracking { pointer: tracked, .. }, event)
                if event.pointer() != tracked =>
            {
                Vec::new()
            }
            (GestureState::Tracking { .. }, InputEvent::PointerDown { .. }) => Vec::new(),
            (GestureState::Tracking { pointer, last, .. }, InputEvent::PointerMove { position, .. }) => {
                if position == last {
                    return Vec::new();
                }
                self.state = GestureState::Tracking {
                    pointer,
                    moved: true,
                    last: position,
                };
                vec![Gesture::Drag(position)]
            }
            (GestureState::Tracking { moved, .. }, InputEvent::PointerUp { position, .. }) => {
                self.state = GestureState::Idle;
                if moved {
                    vec![Gesture::End]
                } else {
                    vec![Gesture::Tap(position), Gesture::End]
                }
            }
            (GestureState::Tracking { .. }, InputEvent::PointerCancel { .. }) => {
                self.state = GestureState::Idle;
                vec![Gesture::End]
            }
        }
    }
}
