use egui::{Pos2, Rect, Vec2};

/// The smaller of the two sides of `size`.
pub fn min_dimension(size: Vec2) -> f32 {
    size.x.min(size.y)
}

/// Center point of a surface of the given size, in surface-local space.
pub fn center_of(size: Vec2) -> Pos2 {
    Pos2::new(size.x / 2.0, size.y / 2.0)
}

/// Point at `radius` from `center` along `angle` (radians, clockwise from +x
/// since y grows downward).
pub fn point_on_circle(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + Vec2::angled(angle) * radius
}

/// Convert a screen position into the local space of `surface`.
pub fn to_local(pos: Pos2, surface: Rect) -> Pos2 {
    (pos - surface.min).to_pos2()
}
