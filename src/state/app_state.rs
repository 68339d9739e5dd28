use egui::Color32;
use serde::Deserialize;

use crate::command::Command;
use crate::document::Document;
use crate::event::AppEvent;
use crate::palette;
use crate::prompt::{self, Prompt};
use crate::stroke::{Stroke, StrokeBuffer};

/// Which screen the canvas is showing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Free drawing on a blank canvas
    Freehand,
    /// Tracing over a ghost illustration
    #[default]
    Puzzle,
}

/// Everything the drawing screen shows.
///
/// The only way to change it is [`AppState::apply`]; every command is a
/// total transition, so any sequence of commands leaves the state valid:
/// the prompt index stays in range, the brush width stays in
/// [`palette::BRUSH_WIDTH_RANGE`], and the in-progress buffer is never part
/// of the committed strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    mode: Mode,
    prompt_index: usize,
    document: Document,
    buffer: StrokeBuffer,
    brush_width: f32,
    brush_color: Color32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            prompt_index: 0,
            document: Document::new(),
            buffer: StrokeBuffer::new(),
            brush_width: palette::DEFAULT_BRUSH_WIDTH,
            brush_color: palette::DEFAULT_COLOR,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command in place and report what changed.
    ///
    /// Returns `None` only when the command had nothing to do (undo with no
    /// strokes, or a NaN brush width).
    pub fn apply(&mut self, command: Command) -> Option<AppEvent> {
        match command {
            Command::SetMode(mode) => {
                let old = std::mem::replace(&mut self.mode, mode);
                Some(AppEvent::ModeChanged { old, new: mode })
            }
            Command::SelectColor(color) => {
                self.brush_color = color;
                Some(AppEvent::ColorChanged { color })
            }
            Command::SetBrushWidth(width) => {
                let width = palette::clamp_brush_width(width)?;
                self.brush_width = width;
                Some(AppEvent::BrushWidthChanged { width })
            }
            Command::Clear => {
                let removed = self.document.len();
                self.document.clear();
                self.buffer.clear();
                Some(AppEvent::Cleared { removed })
            }
            Command::Undo => {
                self.document.remove_last_stroke()?;
                Some(AppEvent::Undone {
                    remaining: self.document.len(),
                })
            }
            Command::NextPrompt => {
                self.prompt_index = (self.prompt_index + 1) % prompt::prompt_count();
                self.document.clear();
                self.buffer.clear();
                Some(AppEvent::PromptChanged {
                    index: self.prompt_index,
                })
            }
            Command::BeginStroke(point) => {
                self.buffer.begin(point);
                Some(AppEvent::StrokeStarted { at: point })
            }
            Command::ExtendStroke(point) => {
                self.buffer.add_point(point);
                Some(AppEvent::StrokeExtended {
                    at: point,
                    points: self.buffer.len(),
                })
            }
            Command::CommitStroke => {
                let points = self.buffer.len();
                match self.buffer.take_stroke(self.brush_color, self.brush_width) {
                    Some(stroke) => {
                        self.document.add_stroke(stroke);
                        Some(AppEvent::StrokeCommitted {
                            index: self.document.len() - 1,
                            points,
                        })
                    }
                    None => Some(AppEvent::StrokeDiscarded { points }),
                }
            }
        }
    }

    /// By-value form of [`AppState::apply`] for callers that thread state
    /// through a chain of transitions.
    pub fn reduce(mut self, command: Command) -> Self {
        self.apply(command);
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn prompt_index(&self) -> usize {
        self.prompt_index
    }

    pub fn prompt(&self) -> &'static Prompt {
        prompt::prompt(self.prompt_index)
    }

    pub fn strokes(&self) -> &[Stroke] {
        self.document.strokes()
    }

    pub fn buffer(&self) -> &StrokeBuffer {
        &self.buffer
    }

    pub fn brush_width(&self) -> f32 {
        self.brush_width
    }

    pub fn brush_color(&self) -> Color32 {
        self.brush_color
    }

    pub fn can_undo(&self) -> bool {
        !self.document.is_empty()
    }
}
