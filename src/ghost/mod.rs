//! Faint reference drawings shown behind the canvas in puzzle mode.
//!
//! Every illustration is a pure function of the drawing surface size, so the
//! same size always yields the same shapes. Coordinates are surface-local.

use egui::{Color32, Pos2, Rect, Stroke, Vec2};

mod illustrations;

/// Opacity shared by every ghost colour.
pub const GHOST_ALPHA: u8 = 0x33;

/// A single translucent drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum GhostShape {
    /// Circle outline.
    Circle {
        center: Pos2,
        radius: f32,
        stroke: Stroke,
    },
    FilledCircle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Line {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
    },
    /// Rectangle outline, optionally with rounded corners.
    Rect {
        rect: Rect,
        corner_radius: f32,
        stroke: Stroke,
    },
    /// Ellipse outline inscribed in `rect`.
    Oval { rect: Rect, stroke: Stroke },
    /// Closed outline through `points`.
    Polygon { points: Vec<Pos2>, stroke: Stroke },
    /// Open path of connected quadratic curves. Each segment is
    /// `[control, end]` and continues from the previous end.
    QuadPath {
        start: Pos2,
        segments: Vec<[Pos2; 2]>,
        stroke: Stroke,
    },
}

/// The five reference pictures, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Illustration {
    Sun,
    Rocket,
    Dinosaur,
    House,
    Dragon,
}

impl Illustration {
    pub const ALL: [Illustration; 5] = [
        Illustration::Sun,
        Illustration::Rocket,
        Illustration::Dinosaur,
        Illustration::House,
        Illustration::Dragon,
    ];

    /// Illustration for a prompt index, wrapping past the end.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Rocket => "rocket",
            Self::Dinosaur => "dinosaur",
            Self::House => "house",
            Self::Dragon => "dragon",
        }
    }

    pub fn shapes(&self, size: Vec2) -> Vec<GhostShape> {
        match self {
            Self::Sun => illustrations::sun(size),
            Self::Rocket => illustrations::rocket(size),
            Self::Dinosaur => illustrations::dinosaur(size),
            Self::House => illustrations::house(size),
            Self::Dragon => illustrations::dragon(size),
        }
    }
}

/// Shapes for the prompt at `prompt_index` on a surface of `size`.
pub fn generate(prompt_index: usize, size: Vec2) -> Vec<GhostShape> {
    Illustration::from_index(prompt_index).shapes(size)
}

/// A ghost colour: the given RGB at [`GHOST_ALPHA`].
pub(crate) fn ghost_color(r: u8, g: u8, b: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, GHOST_ALPHA)
}
