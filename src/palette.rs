use egui::Color32;
use std::ops::RangeInclusive;

pub const MIN_BRUSH_WIDTH: f32 = 12.0;
pub const MAX_BRUSH_WIDTH: f32 = 72.0;
pub const DEFAULT_BRUSH_WIDTH: f32 = 32.0;

/// Range used by the brush size slider.
pub const BRUSH_WIDTH_RANGE: RangeInclusive<f32> = MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH;

/// The swatches offered in the brush controls, in display order.
pub const PALETTE: [Color32; 9] = [
    Color32::from_rgb(0x1E, 0x29, 0x3B), // slate ink
    Color32::from_rgb(0xEF, 0x44, 0x44),
    Color32::from_rgb(0xF9, 0x73, 0x16),
    Color32::from_rgb(0xFA, 0xCC, 0x15),
    Color32::from_rgb(0x22, 0xC5, 0x5E),
    Color32::from_rgb(0x14, 0xB8, 0xA6),
    Color32::from_rgb(0x3B, 0x82, 0xF6),
    Color32::from_rgb(0xA8, 0x55, 0xF7),
    Color32::from_rgb(0xEC, 0x48, 0x99),
];

pub const DEFAULT_COLOR: Color32 = PALETTE[0];

/// Clamp a requested brush width into the slider's bounds.
///
/// Returns `None` for NaN, which has no meaningful nearest bound.
pub fn clamp_brush_width(width: f32) -> Option<f32> {
    if width.is_nan() {
        None
    } else {
        Some(width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH))
    }
}
