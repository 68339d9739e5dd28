use eframe::egui;

const SELECTED_FILL: egui::Color32 = egui::Color32::from_rgb(0xFE, 0xF0, 0x8A);

/// Pill-shaped toggle for switching between drawing and puzzle mode.
pub fn mode_chip(ui: &mut egui::Ui, icon: &str, label: &str, selected: bool) -> egui::Response {
    let mut text = egui::RichText::new(format!("{icon} {label}"));
    if selected {
        text = text.strong();
    }
    let fill = if selected {
        SELECTED_FILL
    } else {
        egui::Color32::WHITE
    };
    ui.add(
        egui::Button::new(text)
            .fill(fill)
            .rounding(24.0)
            .min_size(egui::vec2(0.0, 48.0)),
    )
}
