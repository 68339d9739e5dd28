use egui::epaint::QuadraticBezierShape;
use egui::{Color32, Painter, Rect, Shape, Stroke as EguiStroke};

use crate::ghost::GhostShape;
use crate::state::{AppState, Mode};
use crate::stroke::Stroke;

/// Turns application state into the shapes of one canvas frame.
///
/// Rendering keeps no cache: every frame is rebuilt from state, so it is
/// safe to call as often as egui repaints.
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Paint the current frame into `surface`.
    pub fn render(&self, painter: &Painter, surface: Rect, state: &AppState) {
        painter.extend(self.frame_shapes(state, surface));
    }

    /// Build the frame bottom-up: ghost (puzzle mode only), committed
    /// strokes in commit order, then the stroke still being drawn.
    pub fn frame_shapes(&self, state: &AppState, surface: Rect) -> Vec<Shape> {
        let mut shapes = Vec::new();

        if state.mode() == Mode::Puzzle {
            shapes.extend(
                state
                    .prompt()
                    .ghost(surface.size())
                    .into_iter()
                    .map(ghost_to_shape),
            );
        }

        for stroke in state.strokes() {
            push_stroke(&mut shapes, stroke);
        }

        let buffer = state.buffer();
        if buffer.len() > 1 {
            let preview = buffer.to_preview(state.brush_color(), state.brush_width());
            push_stroke(&mut shapes, &preview);
        }

        let offset = surface.min.to_vec2();
        for shape in &mut shapes {
            shape.translate(offset);
        }
        shapes
    }
}

/// A polyline with round caps and joins: the line itself plus a disc the
/// width of the brush at every vertex.
fn push_stroke(shapes: &mut Vec<Shape>, stroke: &Stroke) {
    if stroke.len() < 2 {
        return;
    }
    let radius = stroke.width() / 2.0;
    shapes.push(Shape::line(
        stroke.points().to_vec(),
        EguiStroke::new(stroke.width(), stroke.color()),
    ));
    shapes.extend(
        stroke
            .points()
            .iter()
            .map(|point| Shape::circle_filled(*point, radius, stroke.color())),
    );
}

fn ghost_to_shape(ghost: GhostShape) -> Shape {
    match ghost {
        GhostShape::Circle {
            center,
            radius,
            stroke,
        } => Shape::circle_stroke(center, radius, stroke),
        GhostShape::FilledCircle {
            center,
            radius,
            color,
        } => Shape::circle_filled(center, radius, color),
        GhostShape::Line { from, to, stroke } => Shape::line_segment([from, to], stroke),
        GhostShape::Rect {
            rect,
            corner_radius,
            stroke,
        } => Shape::rect_stroke(rect, corner_radius, stroke),
        GhostShape::Oval { rect, stroke } => {
            Shape::ellipse_stroke(rect.center(), rect.size() / 2.0, stroke)
        }
        GhostShape::Polygon { points, stroke } => Shape::closed_line(points, stroke),
        GhostShape::QuadPath {
            start,
            segments,
            stroke,
        } => {
            let mut from = start;
            let curves = segments
                .into_iter()
                .map(|[control, to]| {
                    let curve = QuadraticBezierShape::from_points_stroke(
                        [from, control, to],
                        false,
                        Color32::TRANSPARENT,
                        stroke,
                    );
                    from = to;
                    Shape::QuadraticBezier(curve)
                })
                .collect();
            Shape::Vec(curves)
        }
    }
}
