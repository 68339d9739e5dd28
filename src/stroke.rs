use egui::{Color32, Pos2};

/// A committed freehand line. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

/// Points gathered for the gesture currently in flight
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeBuffer {
    points: Vec<Pos2>,
}

impl Stroke {
    pub fn new(color: Color32, width: f32, points: Vec<Pos2>) -> Self {
        Self {
            points,
            color,
            width,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl StrokeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Throw away whatever was buffered and start over at `point`.
    pub fn begin(&mut self, point: Pos2) {
        self.points.clear();
        self.points.push(point);
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Empty the buffer, turning its contents into a stroke when there is
    /// enough of a line to draw (at least two points).
    pub fn take_stroke(&mut self, color: Color32, width: f32) -> Option<Stroke> {
        let points = std::mem::take(&mut self.points);
        (points.len() > 1).then(|| Stroke::new(color, width, points))
    }

    /// Borrow the buffer as a transient stroke for previewing.
    pub fn to_preview(&self, color: Color32, width: f32) -> Stroke {
        Stroke::new(color, width, self.points.clone())
    }
}
