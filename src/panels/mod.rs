use eframe::egui::Color32;

mod central_panel;
mod controls_panel;
mod header_panel;

pub use central_panel::central_panel;
pub use controls_panel::controls_panel;
pub use header_panel::header_panel;

/// Warm paper colour behind every card.
pub const BACKGROUND: Color32 = Color32::from_rgb(0xFF, 0xF8, 0xEE);
const CARD_ROUNDING: f32 = 24.0;
const CARD_MARGIN: f32 = 16.0;

fn card(fill: Color32) -> eframe::egui::Frame {
    eframe::egui::Frame::none()
        .fill(fill)
        .rounding(CARD_ROUNDING)
        .inner_margin(CARD_MARGIN)
}
