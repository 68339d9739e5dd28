use egui::{Color32, Pos2};

use crate::state::Mode;

/// Every way the application state can change.
///
/// UI controls produce the first group directly; the gesture tracker
/// produces the stroke commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SetMode(Mode),
    SelectColor(Color32),
    /// Clamped into the slider range when applied
    SetBrushWidth(f32),
    Clear,
    Undo,
    NextPrompt,
    /// Replace the in-progress buffer with a single point
    BeginStroke(Pos2),
    ExtendStroke(Pos2),
    /// Turn the buffer into a stroke if it holds a line, then empty it
    CommitStroke,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetMode(_) => "set_mode",
            Command::SelectColor(_) => "select_color",
            Command::SetBrushWidth(_) => "set_brush_width",
            Command::Clear => "clear",
            Command::Undo => "undo",
            Command::NextPrompt => "next_prompt",
            Command::BeginStroke(_) => "begin_stroke",
            Command::ExtendStroke(_) => "extend_stroke",
            Command::CommitStroke => "commit_stroke",
        }
    }
}
