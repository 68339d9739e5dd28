use eframe::egui;

use super::BACKGROUND;
use crate::ScribbleApp;

const BORDER_COLOR: egui::Color32 = egui::Color32::from_rgb(0xFB, 0x92, 0x3C);
const BORDER_WIDTH: f32 = 6.0;
const FRAME_ROUNDING: f32 = 32.0;
/// Gap between the orange frame and the drawable area.
const SURFACE_PADDING: f32 = 12.0;

pub fn central_panel(app: &mut ScribbleApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(BACKGROUND).inner_margin(16.0))
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let frame_rect = response.rect;

            painter.rect_filled(frame_rect, FRAME_ROUNDING, egui::Color32::WHITE);
            painter.rect_stroke(
                frame_rect.shrink(BORDER_WIDTH / 2.0),
                FRAME_ROUNDING,
                egui::Stroke::new(BORDER_WIDTH, BORDER_COLOR),
            );

            let surface = frame_rect.shrink(SURFACE_PADDING);
            app.handle_input(ctx, surface);

            let surface_painter = painter.with_clip_rect(surface);
            app.renderer().render(&surface_painter, surface, app.state());
        });
}
