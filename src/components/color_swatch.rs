use eframe::egui;

/// Round, clickable paint swatch used in the brush controls.
pub struct ColorSwatch {
    pub color: egui::Color32,
    pub selected: bool,
}

impl ColorSwatch {
    pub const SIZE: f32 = 48.0;

    pub fn new(color: egui::Color32, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(Self::SIZE, Self::SIZE);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let (border_width, border_color) = if self.selected {
                (6.0, egui::Color32::WHITE)
            } else if response.hovered() {
                (3.0, egui::Color32::from_rgb(0xA5, 0xB4, 0xFC))
            } else {
                (2.0, egui::Color32::from_rgb(0xCB, 0xD5, 0xF5))
            };
            let radius = rect.width() / 2.0 - border_width / 2.0;

            ui.painter().circle_filled(center, radius, self.color);
            ui.painter().circle_stroke(
                center,
                radius,
                egui::Stroke::new(border_width, border_color),
            );

            if self.selected {
                ui.painter().text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    "★",
                    egui::FontId::proportional(18.0),
                    egui::Color32::WHITE,
                );
            }
        }

        response
    }
}
