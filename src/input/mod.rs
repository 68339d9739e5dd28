use egui::{Context, PointerButton, Pos2, Rect, TouchPhase};

mod gestures;
pub use gestures::{Gesture, GestureState, GestureTracker};

use crate::geometry;

/// Identifies one physical contact for the length of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    /// A finger, keyed by both the touch device and the host's touch id
    Touch { device: u64, id: u64 },
}

/// Pointer activity on the drawing surface, in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A contact went down inside the surface
    PointerDown { pointer: PointerId, position: Pos2 },
    /// A contact moved
    PointerMove { pointer: PointerId, position: Pos2 },
    /// A contact was released
    PointerUp { pointer: PointerId, position: Pos2 },
    /// The host stopped tracking a contact without a release
    PointerCancel { pointer: PointerId },
}

impl InputEvent {
    pub fn pointer(&self) -> PointerId {
        match self {
            InputEvent::PointerDown { pointer, .. }
            | InputEvent::PointerMove { pointer, .. }
            | InputEvent::PointerUp { pointer, .. }
            | InputEvent::PointerCancel { pointer } => *pointer,
        }
    }
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug)]
pub struct InputHandler {
    surface_rect: Rect,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            surface_rect: Rect::NOTHING,
        }
    }

    /// Update the drawing surface rectangle (e.g. if window is resized)
    pub fn set_surface_rect(&mut self, rect: Rect) {
        self.surface_rect = rect;
    }

    /// Process this frame's raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let (events, touching) = ctx.input(|input| (input.events.clone(), input.any_touches()));
        self.translate(&events, touching)
    }

    /// Map raw egui events onto [`InputEvent`]s.
    ///
    /// egui mirrors the first touch as mouse events; while touches are
    /// active the mouse stream is dropped so each contact is seen once.
    pub fn translate(&self, events: &[egui::Event], touch_active: bool) -> Vec<InputEvent> {
        let touch_active = touch_active
            || events
                .iter()
                .any(|event| matches!(event, egui::Event::Touch { .. }));

        let mut translated = Vec::new();
        for event in events {
            match event {
                egui::Event::Touch {
                    device_id,
                    id,
                    phase,
                    pos,
                    ..
                } => {
                    let pointer = PointerId::Touch {
                        device: device_id.0,
                        id: id.0,
                    };
                    let position = self.local(*pos);
                    let mapped = match phase {
                        TouchPhase::Start if self.surface_rect.contains(*pos) => {
                            Some(InputEvent::PointerDown { pointer, position })
                        }
                        TouchPhase::Start => None,
                        TouchPhase::Move => Some(InputEvent::PointerMove { pointer, position }),
                        TouchPhase::End => Some(InputEvent::PointerUp { pointer, position }),
                        TouchPhase::Cancel => Some(InputEvent::PointerCancel { pointer }),
                    };
                    translated.extend(mapped);
                }
                _ if touch_active => {}
                egui::Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    let pointer = PointerId::Mouse;
                    let position = self.local(*pos);
                    if !*pressed {
                        translated.push(InputEvent::PointerUp { pointer, position });
                    } else if self.surface_rect.contains(*pos) {
                        translated.push(InputEvent::PointerDown { pointer, position });
                    }
                }
                egui::Event::PointerMoved(pos) => {
                    translated.push(InputEvent::PointerMove {
                        pointer: PointerId::Mouse,
                        position: self.local(*pos),
                    });
                }
                egui::Event::PointerGone => {
                    translated.push(InputEvent::PointerCancel {
                        pointer: PointerId::Mouse,
                    });
                }
                _ => {}
            }
        }
        translated
    }

    fn local(&self, pos: Pos2) -> Pos2 {
        geometry::to_local(pos, self.surface_rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Modifiers, TouchDeviceId, TouchId, pos2, vec2};

    fn handler() -> InputHandler {
        let mut handler = InputHandler::new();
        handler.set_surface_rect(Rect::from_min_size(pos2(100.0, 50.0), vec2(400.0, 300.0)));
        handler
    }

    fn button(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    fn touch(id: u64, phase: TouchPhase, pos: Pos2) -> egui::Event {
        touch_on(0, id, phase, pos)
    }

    fn touch_on(device: u64, id: u64, phase: TouchPhase, pos: Pos2) -> egui::Event {
        egui::Event::Touch {
            device_id: TouchDeviceId(device),
            id: TouchId(id),
            phase,
            pos,
            force: None,
        }
    }

    #[test]
    fn test_mouse_drag_in_surface_coordinates() {
        let events = [
            button(pos2(110.0, 60.0), true),
            egui::Event::PointerMoved(pos2(120.0, 70.0)),
            button(pos2(120.0, 70.0), false),
        ];
        let translated = handler().translate(&events, false);
        assert_eq!(
            translated,
            vec![
                InputEvent::PointerDown {
                    pointer: PointerId::Mouse,
                    position: pos2(10.0, 10.0)
                },
                InputEvent::PointerMove {
                    pointer: PointerId::Mouse,
                    position: pos2(20.0, 20.0)
                },
                InputEvent::PointerUp {
                    pointer: PointerId::Mouse,
                    position: pos2(20.0, 20.0)
                },
            ]
        );
    }

    #[test]
    fn test_press_outside_surface_is_ignored() {
        let events = [button(pos2(10.0, 10.0), true)];
        assert!(handler().translate(&events, false).is_empty());
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let events = [egui::Event::PointerButton {
            pos: pos2(150.0, 100.0),
            button: PointerButton::Secondary,
            pressed: true,
            modifiers: Modifiers::default(),
        }];
        assert!(handler().translate(&events, false).is_empty());
    }

    #[test]
    fn test_pointer_gone_cancels() {
        let events = [egui::Event::PointerGone];
        assert_eq!(
            handler().translate(&events, false),
            vec![InputEvent::PointerCancel {
                pointer: PointerId::Mouse
            }]
        );
    }

    #[test]
    fn test_touch_suppresses_mirrored_mouse_events() {
        let events = [
            touch(7, TouchPhase::Start, pos2(200.0, 100.0)),
            button(pos2(200.0, 100.0), true),
            touch(7, TouchPhase::Move, pos2(210.0, 100.0)),
            egui::Event::PointerMoved(pos2(210.0, 100.0)),
            touch(7, TouchPhase::Cancel, pos2(210.0, 100.0)),
        ];
        let translated = handler().translate(&events, false);
        assert_eq!(translated.len(), 3);
        assert!(
            translated
                .iter()
                .all(|event| event.pointer() == finger(0, 7))
        );
        assert_eq!(
            translated[2],
            InputEvent::PointerCancel {
                pointer: finger(0, 7)
            }
        );
    }

    fn finger(device: u64, id: u64) -> PointerId {
        PointerId::Touch { device, id }
    }

    #[test]
    fn test_touch_start_outside_surface_is_ignored() {
        let events = [
            touch(4, TouchPhase::Start, pos2(20.0, 20.0)),
            touch(4, TouchPhase::Move, pos2(150.0, 100.0)),
        ];
        let translated = handler().translate(&events, false);
        // the contact never went down on the canvas, only its move survives
        assert_eq!(
            translated,
            vec![InputEvent::PointerMove {
                pointer: finger(0, 4),
                position: pos2(50.0, 50.0)
            }]
        );
    }

    #[test]
    fn test_same_touch_id_on_two_devices_are_distinct() {
        let events = [
            touch_on(0, 1, TouchPhase::Start, pos2(150.0, 100.0)),
            touch_on(1, 1, TouchPhase::Start, pos2(250.0, 100.0)),
        ];
        let translated = handler().translate(&events, false);
        assert_eq!(translated.len(), 2);
        assert_eq!(translated[0].pointer(), finger(0, 1));
        assert_eq!(translated[1].pointer(), finger(1, 1));
        assert_ne!(translated[0].pointer(), translated[1].pointer());
    }
}
