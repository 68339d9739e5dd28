use egui::{Color32, Pos2};

use crate::state::Mode;

/// What changed as the result of applying a command.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    ModeChanged {
        old: Mode,
        new: Mode,
    },
    ColorChanged {
        color: Color32,
    },
    BrushWidthChanged {
        width: f32,
    },
    StrokeStarted {
        at: Pos2,
    },
    StrokeExtended {
        at: Pos2,
        /// Points buffered so far, including `at`
        points: usize,
    },
    StrokeCommitted {
        /// Position of the new stroke in the document
        index: usize,
        points: usize,
    },
    /// The gesture ended without enough points to make a line
    StrokeDiscarded {
        points: usize,
    },
    Cleared {
        removed: usize,
    },
    Undone {
        remaining: usize,
    },
    PromptChanged {
        index: usize,
    },
}

impl AppEvent {
    /// Whether the drawing surface looks different after this event.
    pub fn affects_canvas(&self) -> bool {
        !matches!(
            self,
            AppEvent::ColorChanged { .. } | AppEvent::BrushWidthChanged { .. }
        )
    }
}
